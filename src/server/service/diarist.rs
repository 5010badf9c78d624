use sea_orm::DatabaseConnection;
use url::Url;

use crate::server::{
    data::diarist::DiaristRepository,
    error::AppError,
    model::diarist::AvatarUpload,
    storage::{AvatarStorage, AVATAR_FOLDER},
    util,
};

pub struct DiaristService<'a> {
    db: &'a DatabaseConnection,
    storage: &'a AvatarStorage,
    public_url: &'a Url,
}

impl<'a> DiaristService<'a> {
    /// Creates a new DiaristService.
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `storage` - Backend avatars are written to
    /// - `public_url` - Base URL of this server, used for locally stored avatars
    pub fn new(db: &'a DatabaseConnection, storage: &'a AvatarStorage, public_url: &'a Url) -> Self {
        Self {
            db,
            storage,
            public_url,
        }
    }

    /// Stores a new avatar for a diarist and records its public URL.
    ///
    /// The diarist is looked up before anything is stored, so a missing diarist never leaves
    /// an orphaned file behind.
    ///
    /// # Arguments
    /// - `diarist_id` - Id of the diarist
    /// - `upload` - Uploaded image
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the new avatar
    /// - `Err(AppError::NotFound(_))` - Diarist does not exist
    /// - `Err(AppError::BadRequest(_))` - Upload is empty or not a supported image type
    /// - `Err(AppError::IoErr(_))` / `Err(AppError::ReqwestErr(_))` - Storing the file failed
    pub async fn update_avatar(
        &self,
        diarist_id: &str,
        upload: AvatarUpload,
    ) -> Result<String, AppError> {
        let repo = DiaristRepository::new(self.db);

        let Some(diarist) = repo.find_by_id(diarist_id).await? else {
            return Err(AppError::NotFound("Register not found".to_string()));
        };

        if upload.image_extension().is_none() {
            return Err(AppError::BadRequest(
                "Avatar must be a PNG, JPEG, GIF or WebP image".to_string(),
            ));
        }
        if upload.bytes.is_empty() {
            return Err(AppError::BadRequest("Avatar file is empty".to_string()));
        }

        let stored = self.storage.store(&upload).await?;

        let avatar = match stored.location {
            Some(location) => location,
            None => util::url::join(
                self.public_url,
                &format!("files/{}/{}", AVATAR_FOLDER, stored.filename),
            )?
            .to_string(),
        };

        repo.update_avatar(&diarist.id, &avatar).await?;

        tracing::info!("Updated avatar of diarist {}", diarist.id);

        Ok(avatar)
    }
}
