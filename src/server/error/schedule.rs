use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Precondition failures of schedule cancellation.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Schedule does not exist or belongs to another user.
    #[error("Schedule {0} not found")]
    NotFound(String),

    /// Diarist is already working on the schedule.
    #[error("Schedule {0} is in progress")]
    Working(String),

    /// Schedule was already canceled.
    #[error("Schedule {0} is already canceled")]
    Canceled(String),

    /// Schedule was already completed.
    #[error("Schedule {0} is already done")]
    Done(String),

    /// Diarist referenced by the schedule does not exist.
    #[error("Diarist {0} not found")]
    DiaristNotFound(String),

    /// Acting user does not exist.
    #[error("User {0} not found")]
    UserNotFound(String),
}

/// Converts schedule errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - Missing schedule, diarist or user
/// - 409 Conflict - Schedule status no longer allows cancellation
impl IntoResponse for ScheduleError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Schedule not found"),
            Self::DiaristNotFound(_) => (StatusCode::NOT_FOUND, "Diarist not found"),
            Self::UserNotFound(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::Working(_) => (StatusCode::CONFLICT, "Schedule is in progress"),
            Self::Canceled(_) => (StatusCode::CONFLICT, "Schedule is already canceled"),
            Self::Done(_) => (StatusCode::CONFLICT, "Schedule is already done"),
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
