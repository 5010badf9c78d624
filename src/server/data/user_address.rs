//! User address data repository.
//!
//! Addresses are always read through their owning user so callers can only ever see
//! addresses that belong to the user they are acting for.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, ModelTrait,
    QueryOrder,
};

use crate::server::model::{
    address::{UpdateUserAddressParam, UserAddress},
    user::User,
};

/// Repository providing database operations for user addresses.
pub struct UserAddressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserAddressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a user together with all of their addresses.
    ///
    /// Addresses are ordered alphabetically by title.
    ///
    /// # Arguments
    /// - `user_id` - Id of the owning user
    ///
    /// # Returns
    /// - `Ok(Some((User, Vec<UserAddress>)))` - User found, with possibly empty address list
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during either query
    pub async fn find_user_with_addresses(
        &self,
        user_id: &str,
    ) -> Result<Option<(User, Vec<UserAddress>)>, DbErr> {
        let Some(user) = entity::prelude::User::find_by_id(user_id.to_string())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let addresses = user
            .find_related(entity::prelude::UserAddress)
            .order_by_asc(entity::user_address::Column::Title)
            .all(self.db)
            .await?
            .into_iter()
            .map(UserAddress::from_entity)
            .collect();

        Ok(Some((User::from_entity(user), addresses)))
    }

    /// Applies a partial update to an address.
    ///
    /// Only fields present in `param` are written. Callers must skip empty updates, as
    /// an UPDATE without columns is not valid SQL.
    ///
    /// # Arguments
    /// - `address_id` - Id of the address to update
    /// - `param` - Fields to change
    ///
    /// # Returns
    /// - `Ok(UserAddress)` - The address after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No address with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        address_id: &str,
        param: UpdateUserAddressParam,
    ) -> Result<UserAddress, DbErr> {
        let mut address = entity::user_address::ActiveModel {
            id: ActiveValue::Unchanged(address_id.to_string()),
            ..Default::default()
        };

        if let Some(title) = param.title {
            address.title = ActiveValue::Set(title);
        }
        if let Some(address_type) = param.address_type {
            address.r#type = ActiveValue::Set(address_type);
        }
        if let Some(category) = param.category {
            address.category = ActiveValue::Set(category);
        }
        if let Some(rooms) = param.rooms {
            address.rooms = ActiveValue::Set(rooms);
        }
        if let Some(square_meters) = param.square_meters {
            address.square_meters = ActiveValue::Set(square_meters);
        }
        if let Some(zip_code) = param.zip_code {
            address.zip_code = ActiveValue::Set(zip_code);
        }
        if let Some(state) = param.state {
            address.state = ActiveValue::Set(state);
        }
        if let Some(city) = param.city {
            address.city = ActiveValue::Set(city);
        }
        if let Some(neighborhood) = param.neighborhood {
            address.neighborhood = ActiveValue::Set(neighborhood);
        }
        if let Some(street) = param.street {
            address.street = ActiveValue::Set(street);
        }
        if let Some(number) = param.number {
            address.number = ActiveValue::Set(number);
        }
        if let Some(complement) = param.complement {
            // An empty complement clears it
            address.complement = ActiveValue::Set(Some(complement).filter(|c| !c.is_empty()));
        }

        let entity = address.update(self.db).await?;

        Ok(UserAddress::from_entity(entity))
    }
}
