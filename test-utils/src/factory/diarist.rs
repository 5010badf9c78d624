//! Diarist factory for creating household worker entities.

use crate::factory::helpers::{next_id, next_string_id};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test diarists with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let diarist = DiaristFactory::new(&db)
///     .avatar("http://localhost:3333/files/avatar/old.png")
///     .build()
///     .await?;
/// ```
pub struct DiaristFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    name: String,
    email: String,
    avatar: Option<String>,
}

impl<'a> DiaristFactory<'a> {
    /// Creates a new DiaristFactory with default values.
    ///
    /// Defaults:
    /// - id: `"diarist-{n}"`
    /// - name: `"Diarist {n}"`
    /// - email: `"diarist{n}@example.com"`
    /// - avatar: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: next_string_id("diarist"),
            name: format!("Diarist {}", n),
            email: format!("diarist{}@example.com", n),
            avatar: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Builds and inserts the diarist entity into the database.
    pub async fn build(self) -> Result<entity::diarist::Model, DbErr> {
        entity::diarist::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
            avatar: ActiveValue::Set(self.avatar),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a diarist with default values.
pub async fn create_diarist(db: &DatabaseConnection) -> Result<entity::diarist::Model, DbErr> {
    DiaristFactory::new(db).build().await
}
