use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned by every failing endpoint.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Plain confirmation body for operations without a resource to return.
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Free-text search query parameter shared by the search endpoints.
#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub query: String,
}
