use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Reasons a request failed bearer authentication.
///
/// Clients always receive the same 401 response; the variant is only logged.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header on the request.
    #[error("Missing authorization header")]
    MissingAuthorizationHeader,

    /// `Authorization` header contains non-visible ASCII characters.
    #[error("Authorization header is not valid ASCII")]
    MalformedAuthorizationHeader,

    /// Authorization scheme is something other than `Bearer`.
    #[error("Unsupported authorization scheme '{0}'")]
    InvalidScheme(String),

    /// `Bearer` scheme present but no token follows it.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token signature, expiry or audience check failed.
    #[error("Invalid session token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// Token is valid but the principal it names no longer exists.
    #[error("{kind} {id} from session token not found in database")]
    PrincipalNotFound { kind: &'static str, id: String },
}

/// Converts authentication errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with a generic message so callers cannot
/// tell which check failed. The specific reason is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Authentication failed: {}", self);

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Authentication required".to_string(),
            }),
        )
            .into_response()
    }
}
