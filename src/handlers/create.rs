use crate::error::{ApiError, ErrorResponse};
use crate::models::{ItemPayload, ItemResponse};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, Json};
use serde_json::{Map, Value as JsonValue};

/// Raw create/update body. Only JSON objects are accepted.
pub(crate) type JsonObject = Map<String, JsonValue>;

/// Extract the required `name` from a create/update body.
///
/// A body that fails to parse, or is not a JSON object, is treated the same
/// as one without `name`.
pub(crate) fn require_name(
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> Result<String, ApiError> {
    let Json(body) = payload?;
    let payload: ItemPayload = serde_json::from_value(JsonValue::Object(body)).map_err(|e| {
        tracing::debug!("Rejected item payload: {}", e);
        ApiError::NameRequired
    })?;
    payload.name.ok_or(ApiError::NameRequired)
}

/// POST /items handler - Create an item
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created", body = ItemResponse),
        (status = 400, description = "Body missing or name absent", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject>, JsonRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let name = require_name(payload)?;

    let item = state.store.create(name).await;

    tracing::info!(
        "Successfully created item with id: {} (id strategy: {})",
        item.id,
        state.config.id_strategy
    );
    Ok((StatusCode::CREATED, Json(ItemResponse { item })))
}
