//! Schedule domain models and cancellation parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ScheduleStatus;

use crate::model::schedule::{ScheduleDto, ScheduleStatusDto};

/// Booking of a diarist by a user at one of the user's addresses.
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub id: String,
    pub user_id: String,
    pub diarist_id: String,
    pub address_id: String,
    pub date: DateTime<Utc>,
    /// Price in cents.
    pub price: i32,
    pub status: ScheduleStatus,
}

impl Schedule {
    pub fn into_dto(self) -> ScheduleDto {
        ScheduleDto {
            id: self.id,
            user_id: self.user_id,
            diarist_id: self.diarist_id,
            address_id: self.address_id,
            date: self.date,
            price: self.price,
            status: status_into_dto(self.status),
        }
    }

    pub fn from_entity(entity: entity::schedule::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            diarist_id: entity.diarist_id,
            address_id: entity.address_id,
            date: entity.date,
            price: entity.price,
            status: entity.status,
        }
    }
}

fn status_into_dto(status: ScheduleStatus) -> ScheduleStatusDto {
    match status {
        ScheduleStatus::Active => ScheduleStatusDto::Active,
        ScheduleStatus::Working => ScheduleStatusDto::Working,
        ScheduleStatus::Canceled => ScheduleStatusDto::Canceled,
        ScheduleStatus::Done => ScheduleStatusDto::Done,
    }
}

/// Parameters for a user canceling one of their schedules.
#[derive(Debug, Clone)]
pub struct CancelScheduleParam {
    pub schedule_id: String,
    /// Id of the authenticated user requesting the cancellation.
    pub user_id: String,
}
