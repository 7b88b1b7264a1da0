use serde::{Deserialize, Serialize};

/// A named item held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: u64,
    pub name: String,
}

/// Request body for create and update operations
///
/// `name` stays optional at the type level so that a missing field is reported
/// as a validation failure rather than a deserialization error. A `name` that is
/// `null` or not a string is rejected the same way as a missing one.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ItemPayload {
    pub name: Option<String>,
}

/// Response type wrapping a single item
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemResponse {
    pub item: Item,
}

/// Response type for the list endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemsResponse {
    pub items: Vec<Item>,
}

/// Response type carrying a human readable message
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
