//! Diarist domain models and avatar upload parameters.

use axum::body::Bytes;

use crate::model::diarist::DiaristDto;

/// Household worker providing schedules.
#[derive(Debug, Clone, PartialEq)]
pub struct Diarist {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Public URL of the avatar image, if one was uploaded.
    pub avatar: Option<String>,
}

impl Diarist {
    pub fn into_dto(self) -> DiaristDto {
        DiaristDto {
            id: self.id,
            name: self.name,
            avatar: self.avatar,
        }
    }

    pub fn from_entity(entity: entity::diarist::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            avatar: entity.avatar,
        }
    }
}

/// Image received from a multipart avatar upload, not yet stored.
#[derive(Debug, Clone)]
pub struct AvatarUpload {
    /// Filename as sent by the client. Only logged, never used for storage.
    pub original_filename: Option<String>,
    /// MIME type declared by the client.
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl AvatarUpload {
    /// File extension for the declared content type.
    ///
    /// Only raster formats browsers render as images are accepted, `None` for anything else
    /// (including `image/svg+xml`).
    pub fn image_extension(&self) -> Option<&'static str> {
        let content_type = self.content_type.as_deref()?;
        let essence = content_type.split(';').next()?.trim().to_ascii_lowercase();

        match essence.as_str() {
            "image/png" => Some("png"),
            "image/jpeg" | "image/jpg" => Some("jpg"),
            "image/gif" => Some("gif"),
            "image/webp" => Some("webp"),
            _ => None,
        }
    }
}

/// Result of persisting an avatar file.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredFile {
    /// Generated filename the file was stored under.
    pub filename: String,
    /// Public location reported by object storage. `None` for files stored locally.
    pub location: Option<String>,
}
