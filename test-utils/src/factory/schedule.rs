//! Schedule factory.

use crate::factory::helpers::next_string_id;
use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::ScheduleStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating schedules between a user and a diarist.
pub struct ScheduleFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    diarist_id: String,
    address_id: String,
    price: i32,
    status: ScheduleStatus,
}

impl<'a> ScheduleFactory<'a> {
    /// Creates a new ScheduleFactory with default values.
    ///
    /// Defaults:
    /// - id: `"schedule-{n}"`
    /// - price: `15000` cents
    /// - status: `ScheduleStatus::Active`
    /// - date: one day from now
    pub fn new(
        db: &'a DatabaseConnection,
        user_id: &str,
        diarist_id: &str,
        address_id: &str,
    ) -> Self {
        Self {
            db,
            id: next_string_id("schedule"),
            user_id: user_id.to_string(),
            diarist_id: diarist_id.to_string(),
            address_id: address_id.to_string(),
            price: 15000,
            status: ScheduleStatus::Active,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn price(mut self, price: i32) -> Self {
        self.price = price;
        self
    }

    pub fn status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the schedule entity into the database.
    pub async fn build(self) -> Result<entity::schedule::Model, DbErr> {
        let now = Utc::now();
        entity::schedule::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            diarist_id: ActiveValue::Set(self.diarist_id),
            address_id: ActiveValue::Set(self.address_id),
            date: ActiveValue::Set(now + Duration::days(1)),
            price: ActiveValue::Set(self.price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active schedule with default values.
pub async fn create_schedule(
    db: &DatabaseConnection,
    user_id: &str,
    diarist_id: &str,
    address_id: &str,
) -> Result<entity::schedule::Model, DbErr> {
    ScheduleFactory::new(db, user_id, diarist_id, address_id)
        .build()
        .await
}
