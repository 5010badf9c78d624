//! Schedule data repository.

use entity::sea_orm_active_enums::ScheduleStatus;
use sea_orm::{ActiveEnum, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::schedule::Schedule;

/// Repository providing database operations for schedules.
pub struct ScheduleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScheduleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a schedule by id.
    ///
    /// # Returns
    /// - `Ok(Some(Schedule))` - Schedule found
    /// - `Ok(None)` - No schedule with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Schedule>, DbErr> {
        let entity = entity::prelude::Schedule::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Schedule::from_entity))
    }

    /// Moves a schedule from one status to another.
    ///
    /// The row is only written while it still holds `from`, so concurrent transitions of the
    /// same schedule cannot both apply.
    ///
    /// # Arguments
    /// - `id` - Id of the schedule
    /// - `from` - Status the schedule must currently have
    /// - `to` - New status
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - No schedule with that id holds `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn transition_status(
        &self,
        id: &str,
        from: ScheduleStatus,
        to: ScheduleStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Schedule::update_many()
            .filter(entity::schedule::Column::Id.eq(id))
            .filter(entity::schedule::Column::Status.eq(from.to_value()))
            .col_expr(
                entity::schedule::Column::Status,
                sea_orm::sea_query::Expr::value(to.to_value()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
