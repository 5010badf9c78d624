//! Diarist data repository.

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::model::diarist::Diarist;

/// Repository providing database operations for diarists.
pub struct DiaristRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiaristRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a diarist by id.
    ///
    /// # Returns
    /// - `Ok(Some(Diarist))` - Diarist found
    /// - `Ok(None)` - No diarist with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Diarist>, DbErr> {
        let entity = entity::prelude::Diarist::find_by_id(id.to_string())
            .one(self.db)
            .await?;

        Ok(entity.map(Diarist::from_entity))
    }

    /// Sets the avatar URL of a diarist.
    ///
    /// # Arguments
    /// - `id` - Id of the diarist
    /// - `avatar` - Public URL of the stored avatar
    ///
    /// # Returns
    /// - `Ok(())` - Avatar updated (or no matching diarist found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_avatar(&self, id: &str, avatar: &str) -> Result<(), DbErr> {
        entity::prelude::Diarist::update_many()
            .filter(entity::diarist::Column::Id.eq(id))
            .col_expr(
                entity::diarist::Column::Avatar,
                sea_orm::sea_query::Expr::value(avatar),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
