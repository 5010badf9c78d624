//! Employee data repository.

use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::employee::Employee;

/// Repository providing read access to back-office employees.
pub struct EmployeeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmployeeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an employee by id.
    ///
    /// # Returns
    /// - `Ok(Some(Employee))` - Employee found
    /// - `Ok(None)` - No employee with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Employee>, DbErr> {
        let entity = entity::prelude::Employee::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Employee::from_entity))
    }
}
