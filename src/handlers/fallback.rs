use crate::error::ApiError;
use axum::http::{Method, Uri};

/// Router fallback for paths with no matching route
pub async fn not_found_handler(method: Method, uri: Uri) -> ApiError {
    tracing::info!("No route for {} {}", method, uri);
    ApiError::RouteNotFound
}

/// Fallback for known paths requested with an unsupported method
pub async fn method_not_allowed_handler(method: Method, uri: Uri) -> ApiError {
    tracing::info!("Method {} not allowed for {}", method, uri);
    ApiError::MethodNotAllowed
}
