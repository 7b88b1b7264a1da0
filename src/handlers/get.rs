use crate::error::{ApiError, ErrorResponse};
use crate::models::ItemResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::PathRejection, extract::Path, extract::State, http::StatusCode, Json};

/// GET /items/{id} handler - Retrieve one item
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = u64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let Path(id) = id?;

    match state.store.get(id).await {
        Some(item) => {
            tracing::info!("Successfully retrieved item with id: {}", id);
            Ok((StatusCode::OK, Json(ItemResponse { item })))
        }
        None => Err(ApiError::ItemNotFound(id)),
    }
}
