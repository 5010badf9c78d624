use entity::sea_orm_active_enums::ScheduleStatus;
use protos::{events, topics, ScheduleCanceledMessage};
use sea_orm::DatabaseConnection;

use crate::{
    model::schedule::ScheduleCanceledEventDto,
    server::{
        data::{diarist::DiaristRepository, schedule::ScheduleRepository, user::UserRepository},
        error::{internal::InternalError, schedule::ScheduleError, AppError},
        model::{
            diarist::Diarist,
            schedule::{CancelScheduleParam, Schedule},
            user::User,
        },
        producer::EventProducer,
        realtime::ConnectionRegistry,
    },
};

pub struct ScheduleService<'a> {
    db: &'a DatabaseConnection,
    connections: &'a ConnectionRegistry,
    producer: &'a dyn EventProducer,
}

impl<'a> ScheduleService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        connections: &'a ConnectionRegistry,
        producer: &'a dyn EventProducer,
    ) -> Self {
        Self {
            db,
            connections,
            producer,
        }
    }

    /// Cancels an active schedule on behalf of the user who booked it.
    ///
    /// After the status is written, the diarist is notified over their live connections and
    /// the cancellation is published for the payment service. Notification failures are
    /// logged and do not affect the result.
    ///
    /// # Returns
    /// - `Ok(Schedule)` - The schedule with its new `canceled` status
    /// - `Err(ScheduleError::NotFound)` - Schedule missing or booked by another user
    /// - `Err(ScheduleError::Working | Canceled | Done)` - Schedule is no longer active, also when
    ///   a concurrent request changed it first
    /// - `Err(ScheduleError::DiaristNotFound)` - Schedule references a missing diarist
    /// - `Err(ScheduleError::UserNotFound)` - Acting user does not exist
    /// - `Err(AppError::DbErr(_))` - Database error
    pub async fn cancel(&self, param: CancelScheduleParam) -> Result<Schedule, AppError> {
        let schedule_repo = ScheduleRepository::new(self.db);

        let Some(mut schedule) = schedule_repo.find_by_id(&param.schedule_id).await? else {
            return Err(ScheduleError::NotFound(param.schedule_id).into());
        };

        if schedule.user_id != param.user_id {
            return Err(ScheduleError::NotFound(param.schedule_id).into());
        }

        if let Some(err) = inactive_status_error(&schedule) {
            return Err(err.into());
        }

        let Some(diarist) = DiaristRepository::new(self.db)
            .find_by_id(&schedule.diarist_id)
            .await?
        else {
            return Err(ScheduleError::DiaristNotFound(schedule.diarist_id).into());
        };

        let Some(user) = UserRepository::new(self.db)
            .find_by_id(&param.user_id)
            .await?
        else {
            return Err(ScheduleError::UserNotFound(param.user_id).into());
        };

        let canceled = schedule_repo
            .transition_status(&schedule.id, ScheduleStatus::Active, ScheduleStatus::Canceled)
            .await?;

        if !canceled {
            // Status changed since it was read
            let err = match schedule_repo.find_by_id(&schedule.id).await? {
                Some(current) => inactive_status_error(&current)
                    .unwrap_or(ScheduleError::Canceled(current.id)),
                None => ScheduleError::NotFound(schedule.id),
            };
            return Err(err.into());
        }
        schedule.status = ScheduleStatus::Canceled;

        tracing::info!("User {} canceled schedule {}", user.id, schedule.id);

        self.notify_diarist(&schedule, diarist, user).await;
        self.publish_cancellation(&schedule).await;

        Ok(schedule)
    }

    async fn notify_diarist(&self, schedule: &Schedule, diarist: Diarist, user: User) {
        if !self.connections.has_connection(&diarist.id).await {
            return;
        }

        let diarist_id = diarist.id.clone();
        let payload = ScheduleCanceledEventDto {
            schedule: schedule.clone().into_dto(),
            diarist: diarist.into_dto(),
            user: user.into_dto(),
        };

        if let Err(e) = self
            .connections
            .emit(&diarist_id, events::SCHEDULE_CANCELED, &payload)
            .await
        {
            tracing::error!(
                "Failed to notify diarist {} about canceled schedule {}: {}",
                diarist_id,
                schedule.id,
                e
            );
        }
    }

    async fn publish_cancellation(&self, schedule: &Schedule) {
        let message = ScheduleCanceledMessage {
            schedule_id: schedule.id.clone(),
        };

        let result = match serde_json::to_value(&message) {
            Ok(value) => self.producer.send(topics::SCHEDULE_CANCELED, &[value]).await,
            Err(source) => Err(InternalError::EventSerialization {
                event: topics::SCHEDULE_CANCELED.to_string(),
                source,
            }
            .into()),
        };

        if let Err(e) = result {
            tracing::error!(
                "Failed to publish cancellation of schedule {}: {}",
                schedule.id,
                e
            );
        }
    }
}

/// Error for a schedule that can no longer be canceled, `None` while it is active.
fn inactive_status_error(schedule: &Schedule) -> Option<ScheduleError> {
    match schedule.status {
        ScheduleStatus::Active => None,
        ScheduleStatus::Working => Some(ScheduleError::Working(schedule.id.clone())),
        ScheduleStatus::Canceled => Some(ScheduleError::Canceled(schedule.id.clone())),
        ScheduleStatus::Done => Some(ScheduleError::Done(schedule.id.clone())),
    }
}
