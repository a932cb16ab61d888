//! Item CRUD routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use items::{Item, ItemInput};
use uuid::Uuid;

use crate::services::item::{self, ItemError};
use crate::state::AppState;

/// `GET /api/items` — list all items, oldest first.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let store = state.store.read().await;
    Json(item::list_items(&store))
}

/// `POST /api/items` — create a new item.
pub async fn create_item(
    State(state): State<AppState>,
    Json(body): Json<ItemInput>,
) -> Result<(StatusCode, Json<Item>), StatusCode> {
    let mut store = state.store.write().await;
    let created = item::create_item(&mut store, &body).map_err(item_error_to_status)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /api/items/:id` — replace the editable fields of one item.
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ItemInput>,
) -> Result<Json<Item>, StatusCode> {
    let mut store = state.store.write().await;
    let updated = item::update_item(&mut store, id, &body).map_err(item_error_to_status)?;
    Ok(Json(updated))
}

/// `DELETE /api/items/:id` — delete one item.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let mut store = state.store.write().await;
    item::delete_item(&mut store, id).map_err(item_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

pub(crate) fn item_error_to_status(err: ItemError) -> StatusCode {
    match err {
        ItemError::NotFound(_) => StatusCode::NOT_FOUND,
        ItemError::MissingField => StatusCode::BAD_REQUEST,
    }
}

#[cfg(test)]
#[path = "items_test.rs"]
mod tests;
