/**
 * Catalog API Handlers
 *
 * The JSON REST family over the same operations as the pages. These
 * endpoints carry no session gate: every `/api/items` route answers
 * regardless of session state, mirroring the page/API asymmetry of the
 * application this serves.
 *
 * Errors come back as a flat `{ "error": ..., "status": ... }` body; a
 * missing id is an explicit 404.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::error::AppError;
use crate::store::{Item, ItemFields, Store};

/// `GET /api/items` - full catalog listing
pub async fn api_list(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<Vec<Item>>, AppError> {
    let items = store.list_items(None).await?;
    Ok(Json(items))
}

/// `POST /api/items` - create an item, returning the created record
pub async fn api_create(
    State(store): State<Arc<dyn Store>>,
    Json(fields): Json<ItemFields>,
) -> Result<Json<Item>, AppError> {
    let item = store.insert_item(fields).await?;
    Ok(Json(item))
}

/// `PUT /api/items/{id}` - update, returning the fully updated
/// representation
pub async fn api_update(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
    Json(fields): Json<ItemFields>,
) -> Result<Json<Item>, AppError> {
    let item = store.update_item(id, fields).await?.ok_or(AppError::NotFound)?;
    Ok(Json(item))
}

/// `DELETE /api/items/{id}` - delete, 404 when the id does not exist
pub async fn api_delete(
    State(store): State<Arc<dyn Store>>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    if store.delete_item(id).await? {
        Ok(Json(serde_json::json!({ "message": "Deleted" })))
    } else {
        Err(AppError::NotFound)
    }
}
