/**
 * Router Configuration
 *
 * This module assembles the application router from three route families:
 *
 * 1. Page routes (`/items*`) - behind the `require_login` gate
 * 2. API routes (`/api/items*`) - deliberately ungated
 * 3. Auth/session routes (`/`, `/login`, `/logout`, `/auth/{provider}`, `/setup`)
 *
 * The `resolve_session` middleware wraps all of them, so every handler can
 * see the principal when one exists; only the page family enforces it.
 * Static assets are served under `/static` and unknown paths fall back to
 * a rendered 404 page.
 */

use axum::{
    http::StatusCode,
    response::Html,
    routing::{get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::auth::handlers::{
    index, login_page, login_submit, logout, oauth_callback, oauth_start, setup,
};
use crate::catalog::handlers::{
    api_create, api_delete, api_list, api_update, create_form, create_submit, delete_submit,
    edit_form, list, update_submit,
};
use crate::catalog::views;
use crate::middleware::{require_login, resolve_session};
use crate::server::state::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    // Page family: session required, redirect to /login otherwise.
    let pages = Router::new()
        .route("/items", get(list).post(create_submit))
        .route("/items/create", get(create_form))
        .route("/items/edit/{id}", get(edit_form))
        .route("/items/update/{id}", post(update_submit))
        .route("/items/delete/{id}", post(delete_submit))
        .route_layer(axum::middleware::from_fn(require_login));

    // API family: no gate, answers regardless of session state.
    let api = Router::new()
        .route("/api/items", get(api_list).post(api_create))
        .route("/api/items/{id}", put(api_update).delete(api_delete));

    // Session and identity routes.
    let auth = Router::new()
        .route("/", get(index))
        .route("/login", get(login_page).post(login_submit))
        .route("/logout", get(logout).post(logout))
        .route("/auth/{provider}", get(oauth_start))
        .route("/auth/{provider}/callback", get(oauth_callback))
        .route("/setup", get(setup));

    pages
        .merge(api)
        .merge(auth)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            resolve_session,
        ))
        .nest_service("/static", ServeDir::new("public"))
        .fallback(|| async { (StatusCode::NOT_FOUND, Html(views::not_found_page())) })
        .with_state(state)
}
