use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Freshly signed session token.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionTokenDto {
    pub token: String,
}
