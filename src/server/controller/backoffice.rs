use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SessionTokenDto},
        diarist::{AvatarUploadForm, DiaristAvatarDto},
        employee::EmployeeDto,
    },
    server::{
        controller::diarist::read_avatar_upload,
        error::AppError,
        middleware::auth::{Authenticated, Principal},
        model::employee::Employee,
        service::diarist::DiaristService,
        state::AppState,
    },
};

/// Tag for grouping back-office endpoints in OpenAPI documentation
pub static BACKOFFICE_TAG: &str = "backoffice";

/// Get the authenticated employee.
///
/// Lets the back-office client check whether its session token is still valid.
///
/// # Access Control
/// - `Employee` - Any authenticated employee
///
/// # Returns
/// - `200 OK` - The employee named by the session token
/// - `401 Unauthorized` - Missing, malformed or invalid session token
#[utoipa::path(
    get,
    path = "/api/backoffice/session",
    tag = BACKOFFICE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Authenticated employee", body = EmployeeDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session(
    Authenticated(employee): Authenticated<Employee>,
) -> Result<impl IntoResponse, AppError> {
    Ok((StatusCode::OK, Json(employee.into_dto())))
}

/// Issue a new session token for the authenticated employee.
///
/// The new token carries a full lifetime, so an active back-office client can keep its
/// session without signing in again.
///
/// # Access Control
/// - `Employee` - Any authenticated employee
///
/// # Returns
/// - `200 OK` - New session token
/// - `401 Unauthorized` - Missing, malformed or invalid session token
#[utoipa::path(
    post,
    path = "/api/backoffice/session/refresh",
    tag = BACKOFFICE_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "New session token", body = SessionTokenDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh_session(
    State(state): State<AppState>,
    Authenticated(employee): Authenticated<Employee>,
) -> Result<impl IntoResponse, AppError> {
    let token = state.session_tokens.sign(&employee.id, Employee::AUDIENCE)?;

    tracing::debug!("Refreshed session of employee {}", employee.id);

    Ok((StatusCode::OK, Json(SessionTokenDto { token })))
}

/// Replace the avatar of any diarist.
///
/// # Access Control
/// - `Employee` - Any authenticated employee
///
/// # Arguments
/// - `diarist_id` - Id of the diarist whose avatar is replaced
/// - `multipart` - Form with the image in the `avatar` field
///
/// # Returns
/// - `200 OK` - Public URL of the new avatar
/// - `400 Bad Request` - Missing field, empty file, or not an image
/// - `401 Unauthorized` - Not authenticated as an employee
/// - `404 Not Found` - Diarist does not exist
/// - `500 Internal Server Error` - Storage or database error
#[utoipa::path(
    put,
    path = "/api/backoffice/diarists/{diarist_id}/avatar",
    tag = BACKOFFICE_TAG,
    security(("bearer" = [])),
    params(
        ("diarist_id" = String, Path, description = "Diarist id")
    ),
    request_body(content = AvatarUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar updated", body = DiaristAvatarDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Diarist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_diarist_avatar(
    State(state): State<AppState>,
    Authenticated(employee): Authenticated<Employee>,
    Path(diarist_id): Path<String>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let upload = read_avatar_upload(multipart).await?;

    let service = DiaristService::new(&state.db, &state.avatar_storage, &state.public_url);
    let avatar = service.update_avatar(&diarist_id, upload).await?;

    tracing::info!(
        "Employee {} replaced avatar of diarist {}",
        employee.id,
        diarist_id
    );

    Ok((StatusCode::OK, Json(DiaristAvatarDto { avatar })))
}
