use crate::error::{ApiError, ErrorResponse};
use crate::handlers::create::{require_name, JsonObject};
use crate::models::{ItemPayload, ItemResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// PUT /items/{id} handler - Rename an item
///
/// The body is validated before the lookup, so a bad body on an unknown id
/// is reported as 400 rather than 404.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 400, description = "Body missing or name absent", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let Path(id) = id?;
    let name = require_name(payload)?;

    let item = state
        .store
        .update(id, name)
        .await
        .ok_or(ApiError::ItemNotFound(id))?;

    tracing::info!("Successfully updated item with id: {}", id);
    Ok((StatusCode::OK, Json(ItemResponse { item })))
}
