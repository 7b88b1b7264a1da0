use crate::models::ItemsResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /items handler - List all items
///
/// Items are returned in insertion order. There is no pagination or filtering.
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items in insertion order", body = ItemsResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<ItemsResponse>) {
    let items = state.store.list().await;

    tracing::info!("Listed {} items", items.len());
    (StatusCode::OK, Json(ItemsResponse { items }))
}
