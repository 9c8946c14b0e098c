use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Generic success acknowledgement for mutations that return no payload.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}
