use crate::error::{ApiError, ErrorResponse};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::PathRejection, extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /items/{id} handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Path(id) = id?;

    let remaining = state
        .store
        .delete(id)
        .await
        .ok_or(ApiError::ItemNotFound(id))?;

    tracing::info!(
        "Successfully deleted item with id: {} ({} remaining)",
        id,
        remaining
    );
    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Item deleted".to_string(),
        }),
    ))
}
