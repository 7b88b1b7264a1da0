use crate::models::MessageResponse;
use crate::routes;
use axum::{http::StatusCode, Json};

/// GET / handler - Welcome message
#[utoipa::path(
    get,
    path = routes::ROOT,
    responses(
        (status = 200, description = "Service is up", body = MessageResponse)
    ),
    tag = "home"
)]
pub async fn home_handler() -> (StatusCode, Json<MessageResponse>) {
    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Welcome to the Flask API!".to_string(),
        }),
    )
}
