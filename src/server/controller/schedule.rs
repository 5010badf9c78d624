use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, schedule::ScheduleDto},
    server::{
        error::AppError,
        middleware::auth::Authenticated,
        model::{schedule::CancelScheduleParam, user::User},
        service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping schedule endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// Cancel one of the authenticated user's schedules.
///
/// Only active schedules can be canceled. The diarist is notified over the websocket if
/// connected, and the payment service is notified through the `payment.schedule-canceled`
/// topic.
///
/// # Access Control
/// - `User` - Only schedules they booked
///
/// # Returns
/// - `200 OK` - The canceled schedule
/// - `401 Unauthorized` - Not authenticated as a user
/// - `404 Not Found` - Schedule, diarist or user not found
/// - `409 Conflict` - Schedule is working, already canceled or done
#[utoipa::path(
    post,
    path = "/api/users/me/schedules/{schedule_id}/cancel",
    tag = SCHEDULE_TAG,
    security(("bearer" = [])),
    params(
        ("schedule_id" = String, Path, description = "Schedule id")
    ),
    responses(
        (status = 200, description = "Schedule canceled", body = ScheduleDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Schedule not found", body = ErrorDto),
        (status = 409, description = "Schedule can no longer be canceled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cancel_schedule(
    State(state): State<AppState>,
    Authenticated(user): Authenticated<User>,
    Path(schedule_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ScheduleService::new(&state.db, &state.connections, state.producer.as_ref());

    let schedule = service
        .cancel(CancelScheduleParam {
            schedule_id,
            user_id: user.id,
        })
        .await?;

    Ok((StatusCode::OK, Json(schedule.into_dto())))
}
