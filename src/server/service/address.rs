use sea_orm::DatabaseConnection;

use crate::server::{
    data::user_address::UserAddressRepository,
    error::AppError,
    model::address::{UpdateUserAddressParam, UserAddress},
};

pub struct AddressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AddressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all addresses of a user, ordered by title.
    ///
    /// # Returns
    /// - `Ok(Vec<UserAddress>)` - The user's addresses
    /// - `Err(AppError::NotFound(_))` - User does not exist
    pub async fn list(&self, user_id: &str) -> Result<Vec<UserAddress>, AppError> {
        let repo = UserAddressRepository::new(self.db);

        let Some((_, addresses)) = repo.find_user_with_addresses(user_id).await? else {
            return Err(AppError::NotFound("Register not found".to_string()));
        };

        Ok(addresses)
    }

    /// Gets one address among the user's own addresses.
    ///
    /// # Returns
    /// - `Ok(UserAddress)` - Address belongs to the user
    /// - `Err(AppError::NotFound(_))` - User does not exist
    /// - `Err(AppError::BadRequest(_))` - No address with that id among the user's addresses
    pub async fn get(&self, user_id: &str, address_id: &str) -> Result<UserAddress, AppError> {
        self.list(user_id)
            .await?
            .into_iter()
            .find(|address| address.id == address_id)
            .ok_or_else(|| AppError::BadRequest("Address not found for user".to_string()))
    }

    /// Applies a partial update to one of the user's addresses.
    ///
    /// An update without fields returns the address unchanged without writing.
    ///
    /// # Returns
    /// - `Ok(UserAddress)` - The address after the update
    /// - `Err(AppError::NotFound(_))` - User does not exist
    /// - `Err(AppError::BadRequest(_))` - Address not owned by the user, or invalid field values
    pub async fn update(
        &self,
        user_id: &str,
        address_id: &str,
        param: UpdateUserAddressParam,
    ) -> Result<UserAddress, AppError> {
        let address = self.get(user_id, address_id).await?;

        param.validate().map_err(AppError::BadRequest)?;

        if param.is_empty() {
            return Ok(address);
        }

        let repo = UserAddressRepository::new(self.db);
        let updated = repo.update(&address.id, param).await?;

        Ok(updated)
    }
}
