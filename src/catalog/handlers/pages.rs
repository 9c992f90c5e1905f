/**
 * Catalog Page Handlers
 *
 * The session-gated page family: list-with-search, create form and
 * submit, edit form, update submit, delete submit. Every handler performs
 * at most one store call and answers with rendered HTML or a redirect.
 *
 * These routes sit behind the `require_login` gate; the handlers
 * themselves can assume a resolved principal.
 */

use axum::{
    extract::{Form, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::catalog::views;
use crate::error::AppError;
use crate::middleware::AuthUser;
use crate::server::state::AppState;
use crate::store::ItemFields;

/// Search query of the list page
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring over title and author; empty matches all
    pub search: Option<String>,
}

/// `GET /items` - list the catalog, optionally filtered
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let search = query.search.unwrap_or_default();
    let items = state.store.list_items(Some(search.as_str())).await?;
    Ok(Html(views::items_page(&items, &search, &user.display_name)))
}

/// `GET /items/create` - blank create form
pub async fn create_form(AuthUser(user): AuthUser) -> Html<String> {
    Html(views::create_page(&user.display_name))
}

/// `POST /items` - create an item and return to the list
///
/// No validation of field shapes; absent fields come through as empty
/// strings.
pub async fn create_submit(
    State(state): State<AppState>,
    Form(fields): Form<ItemFields>,
) -> Result<Redirect, AppError> {
    state.store.insert_item(fields).await?;
    Ok(Redirect::to("/items"))
}

/// `GET /items/edit/{id}` - pre-filled edit form, 404 when the id is gone
pub async fn edit_form(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    match state.store.get_item(id).await? {
        Some(item) => Ok(Html(views::edit_page(&item, &user.display_name)).into_response()),
        None => Ok(not_found()),
    }
}

/// `POST /items/update/{id}` - update fields in place
pub async fn update_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(fields): Form<ItemFields>,
) -> Result<Response, AppError> {
    match state.store.update_item(id, fields).await? {
        Some(_) => Ok(Redirect::to("/items").into_response()),
        None => Ok(not_found()),
    }
}

/// `POST /items/delete/{id}` - remove the item
pub async fn delete_submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    if state.store.delete_item(id).await? {
        Ok(Redirect::to("/items").into_response())
    } else {
        Ok(not_found())
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found_page())).into_response()
}
