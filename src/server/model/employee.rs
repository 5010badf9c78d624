//! Back-office employee domain model.

use chrono::{DateTime, Utc};

use crate::model::employee::EmployeeDto;

/// Staff member authenticated on back-office routes.
#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl Employee {
    pub fn into_dto(self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            name: self.name,
            email: self.email,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to an employee domain model at the repository boundary.
    pub fn from_entity(entity: entity::employee::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}
