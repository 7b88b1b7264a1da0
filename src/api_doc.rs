use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::{Item, ItemPayload, ItemResponse, ItemsResponse, MessageResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "item-store API",
        version = "1.0.0",
        description = "CRUD operations over an in-memory collection of named items"
    ),
    paths(
        handlers::home::home_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            ItemPayload,
            ItemResponse,
            ItemsResponse,
            MessageResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "home", description = "Service welcome"),
        (name = "items", description = "Item store operations")
    )
)]
pub struct ApiDoc;
