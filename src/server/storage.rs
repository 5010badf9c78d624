//! Avatar file storage.
//!
//! Avatars are either written below the local upload directory and served by this server
//! under `/files`, or uploaded to an object storage bucket reachable over HTTP.

use std::path::PathBuf;

use rand::Rng;
use reqwest::header::{CONTENT_TYPE, LOCATION};
use url::Url;

use crate::server::{
    error::AppError,
    model::diarist::{AvatarUpload, StoredFile},
    util,
};

/// Folder avatars are stored in, both locally and in the bucket.
pub const AVATAR_FOLDER: &str = "avatar";

const FILENAME_LENGTH: usize = 24;

/// Storage backend for uploaded avatars.
#[derive(Clone)]
pub enum AvatarStorage {
    /// Files live in `<upload_dir>/avatar`.
    Local { upload_dir: PathBuf },
    /// Files are uploaded with `PUT <bucket_url>/avatar/<filename>`.
    Object {
        client: reqwest::Client,
        bucket_url: Url,
    },
}

impl AvatarStorage {
    /// Stores an upload under a freshly generated filename.
    ///
    /// # Returns
    /// - `Ok(StoredFile)` - Filename used, plus the object location for object storage
    /// - `Err(AppError::IoErr(_))` - Local write failed
    /// - `Err(AppError::ReqwestErr(_))` - Object storage rejected or did not answer the upload
    pub async fn store(&self, upload: &AvatarUpload) -> Result<StoredFile, AppError> {
        let filename = generate_filename(upload);

        match self {
            Self::Local { upload_dir } => {
                let folder = upload_dir.join(AVATAR_FOLDER);
                tokio::fs::create_dir_all(&folder).await?;
                tokio::fs::write(folder.join(&filename), &upload.bytes).await?;

                tracing::debug!(
                    "Stored avatar {:?} as {} in {}",
                    upload.original_filename,
                    filename,
                    folder.display()
                );

                Ok(StoredFile {
                    filename,
                    location: None,
                })
            }
            Self::Object { client, bucket_url } => {
                let url = util::url::join(bucket_url, &format!("{}/{}", AVATAR_FOLDER, filename))?;

                let mut request = client.put(url.clone()).body(upload.bytes.clone());
                if let Some(content_type) = &upload.content_type {
                    request = request.header(CONTENT_TYPE, content_type);
                }

                let response = request.send().await?.error_for_status()?;

                // Some gateways answer with the final object location
                let location = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
                    .unwrap_or_else(|| url.to_string());

                tracing::debug!(
                    "Uploaded avatar {:?} as {} to {}",
                    upload.original_filename,
                    filename,
                    location
                );

                Ok(StoredFile {
                    filename,
                    location: Some(location),
                })
            }
        }
    }
}

/// Generates a random filename with the extension of the declared image type.
///
/// The client filename is ignored. Uploads without a supported image type get no extension.
pub fn generate_filename(upload: &AvatarUpload) -> String {
    const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();
    let stem: String = (0..FILENAME_LENGTH)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();

    match upload.image_extension() {
        Some(extension) => format!("{}.{}", stem, extension),
        None => stem,
    }
}
