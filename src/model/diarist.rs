use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiaristDto {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

/// Response body of an avatar update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DiaristAvatarDto {
    /// Public URL of the stored avatar.
    pub avatar: String,
}

/// Multipart form accepted by the avatar upload endpoints.
///
/// Only used to document the request body.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AvatarUploadForm {
    /// Image file (`image/png`, `image/jpeg`, `image/gif` or `image/webp`).
    #[schema(value_type = String, format = Binary)]
    pub avatar: Vec<u8>,
}
