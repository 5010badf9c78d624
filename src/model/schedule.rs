use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{diarist::DiaristDto, user::UserDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatusDto {
    Active,
    Working,
    Canceled,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleDto {
    pub id: String,
    pub user_id: String,
    pub diarist_id: String,
    pub address_id: String,
    pub date: DateTime<Utc>,
    /// Price in cents.
    pub price: i32,
    pub status: ScheduleStatusDto,
}

/// Payload of the `schedule:canceled` websocket event sent to the diarist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleCanceledEventDto {
    pub schedule: ScheduleDto,
    pub diarist: DiaristDto,
    pub user: UserDto,
}
