use axum::{http::Request, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::api_doc::ApiDoc;
use crate::error::handle_panic;
use crate::handlers;
use crate::routes;
use crate::state::AppState;

/// Build the application router with every item route, the API docs,
/// JSON fallbacks and the request tracing / panic layers.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(routes::ROOT, get(handlers::home_handler))
        .route(
            routes::ITEMS,
            get(handlers::list_handler).post(handlers::create_handler),
        )
        .route(
            routes::ITEM,
            get(handlers::get_handler)
                .put(handlers::update_handler)
                .delete(handlers::delete_handler),
        )
        .merge(SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()))
        .fallback(handlers::not_found_handler)
        .method_not_allowed_fallback(handlers::method_not_allowed_handler)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        request_id = %Uuid::new_v4(),
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, IdStrategy};
    use crate::error::ErrorResponse;
    use axum::{body::Body, http::StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_full_item_scenario() {
        let app = build_router(AppState::new(Config::default()));

        let (status, body) = send(&app, "POST", "/items", Some(json!({"name": "apple"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"item": {"id": 1, "name": "apple"}}));

        let (status, body) = send(&app, "POST", "/items", Some(json!({"name": "banana"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, json!({"item": {"id": 2, "name": "banana"}}));

        let (status, body) = send(&app, "GET", "/items", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({"items": [{"id": 1, "name": "apple"}, {"id": 2, "name": "banana"}]})
        );

        let (status, body) = send(&app, "DELETE", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Item deleted"}));

        let (status, body) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Item not found"}));
    }

    #[tokio::test]
    async fn test_round_trip_create_get_delete_get() {
        let app = build_router(AppState::new(Config::default()));

        let (status, _) = send(&app, "POST", "/items", Some(json!({"name": "kiwi"}))).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "DELETE", "/items/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "GET", "/items/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_length_strategy_repeats_id_after_delete() {
        let app = build_router(AppState::new(Config::default()));

        send(&app, "POST", "/items", Some(json!({"name": "apple"}))).await;
        send(&app, "POST", "/items", Some(json!({"name": "banana"}))).await;
        send(&app, "DELETE", "/items/2", None).await;

        let (_, body) = send(&app, "POST", "/items", Some(json!({"name": "cherry"}))).await;
        assert_eq!(body, json!({"item": {"id": 2, "name": "cherry"}}));
    }

    #[tokio::test]
    async fn test_monotonic_strategy_skips_deleted_ids() {
        let config = Config {
            id_strategy: IdStrategy::Monotonic,
            ..Config::default()
        };
        let app = build_router(AppState::new(config));

        send(&app, "POST", "/items", Some(json!({"name": "apple"}))).await;
        send(&app, "POST", "/items", Some(json!({"name": "banana"}))).await;
        send(&app, "DELETE", "/items/2", None).await;

        let (_, body) = send(&app, "POST", "/items", Some(json!({"name": "cherry"}))).await;
        assert_eq!(body, json!({"item": {"id": 3, "name": "cherry"}}));
    }

    #[tokio::test]
    async fn test_unknown_route_returns_json_404() {
        let app = build_router(AppState::new(Config::default()));

        let (status, body) = send(&app, "GET", "/does-not-exist", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Not found"}));
    }

    #[tokio::test]
    async fn test_non_integer_id_returns_route_404() {
        let app = build_router(AppState::new(Config::default()));

        for uri in ["/items/abc", "/items/-1", "/items/1.5"] {
            let (status, body) = send(&app, "GET", uri, None).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "uri: {}", uri);
            assert_eq!(body, json!({"error": "Not found"}), "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn test_unsupported_method_returns_json_405() {
        let app = build_router(AppState::new(Config::default()));

        let (status, body) = send(&app, "PATCH", "/items/1", Some(json!({"name": "x"}))).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        let error: ErrorResponse = serde_json::from_value(body).unwrap();
        assert_eq!(error.error, "Method not allowed");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let app = build_router(AppState::new(Config::default()));

        let (status, body) = send(&app, "GET", routes::OPENAPI_JSON, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["paths"].get("/items").is_some());
        assert!(body["paths"].get("/items/{id}").is_some());
    }

    #[tokio::test]
    async fn test_panicking_handler_returns_generic_500() {
        async fn boom() -> &'static str {
            panic!("store exploded")
        }

        let app: Router = Router::new()
            .route("/boom", get(boom))
            .layer(CatchPanicLayer::custom(handle_panic));

        let (status, body) = send(&app, "GET", "/boom", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Internal server error"}));

        // The router keeps serving after a panic
        let (status, _) = send(&app, "GET", "/boom", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
