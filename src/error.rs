use std::any::Any;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Custom error type for API endpoints
///
/// Every failure is converted into a JSON body at the point of detection.
/// Internal errors are logged in full but rendered without detail.
#[derive(Debug)]
pub enum ApiError {
    /// Body missing, not valid JSON, or without a string `name`
    NameRequired,
    /// No item with the given id
    ItemNotFound(u64),
    /// No route matches the request path
    RouteNotFound,
    /// Route exists but not for this method
    MethodNotAllowed,
    /// Anything unexpected
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NameRequired => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: Some("Name is required".to_string()),
                },
            ),
            ApiError::ItemNotFound(id) => {
                tracing::info!("Item not found with id: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Item not found".to_string(),
                        message: None,
                    },
                )
            }
            ApiError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Not found".to_string(),
                    message: None,
                },
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse {
                    error: "Method not allowed".to_string(),
                    message: None,
                },
            ),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal server error".to_string(),
                        message: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", err.body_text());
        ApiError::NameRequired
    }
}

impl From<PathRejection> for ApiError {
    fn from(err: PathRejection) -> Self {
        tracing::debug!("Rejected path parameter: {}", err.body_text());
        ApiError::RouteNotFound
    }
}

/// Renders a handler panic as the generic internal error response.
///
/// Installed through `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    ApiError::Internal(anyhow::anyhow!("handler panicked: {}", detail)).into_response()
}
