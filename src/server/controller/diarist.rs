use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        diarist::{AvatarUploadForm, DiaristAvatarDto},
    },
    server::{
        error::AppError,
        middleware::auth::Authenticated,
        model::diarist::{AvatarUpload, Diarist},
        service::diarist::DiaristService,
        state::AppState,
    },
};

/// Tag for grouping diarist endpoints in OpenAPI documentation
pub static DIARIST_TAG: &str = "diarist";

/// Multipart field carrying the avatar image.
const AVATAR_FIELD: &str = "avatar";

/// Replace the avatar of the authenticated diarist.
///
/// # Access Control
/// - `Diarist` - Only their own avatar
///
/// # Returns
/// - `200 OK` - Public URL of the new avatar
/// - `400 Bad Request` - Missing field, empty file, or not an image
/// - `401 Unauthorized` - Not authenticated as a diarist
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    put,
    path = "/api/diarists/me/avatar",
    tag = DIARIST_TAG,
    security(("bearer" = [])),
    request_body(content = AvatarUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar updated", body = DiaristAvatarDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_own_avatar(
    State(state): State<AppState>,
    Authenticated(diarist): Authenticated<Diarist>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_avatar_upload(multipart).await?;

    let service = DiaristService::new(&state.db, &state.avatar_storage, &state.public_url);
    let avatar = service.update_avatar(&diarist.id, upload).await?;

    Ok((StatusCode::OK, Json(DiaristAvatarDto { avatar })))
}

/// Reads the `avatar` field of a multipart form, skipping any other field.
///
/// # Returns
/// - `Ok(AvatarUpload)` - File name, content type and bytes of the field
/// - `Err(AppError::BadRequest(_))` - The form has no `avatar` field
/// - `Err(AppError::MultipartErr(_))` - Malformed multipart body
pub async fn read_avatar_upload(mut multipart: Multipart) -> Result<AvatarUpload, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AVATAR_FIELD) {
            continue;
        }

        let original_filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        return Ok(AvatarUpload {
            original_filename,
            content_type,
            bytes,
        });
    }

    Err(AppError::BadRequest(format!(
        "Missing '{}' file field",
        AVATAR_FIELD
    )))
}
