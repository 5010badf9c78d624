//! User address factory.

use crate::factory::helpers::{next_id, next_string_id};
use entity::sea_orm_active_enums::{AddressCategory, AddressType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating addresses owned by a user.
///
/// Defaults describe a two-room residential house; override the fields a test cares about.
pub struct UserAddressFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    user_id: String,
    title: String,
    address_type: AddressType,
    category: AddressCategory,
    rooms: i32,
    square_meters: i32,
    complement: Option<String>,
}

impl<'a> UserAddressFactory<'a> {
    /// Creates a new UserAddressFactory for the given user.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Id of the user owning the address
    pub fn new(db: &'a DatabaseConnection, user_id: &str) -> Self {
        let n = next_id();
        Self {
            db,
            id: next_string_id("address"),
            user_id: user_id.to_string(),
            title: format!("Address {}", n),
            address_type: AddressType::House,
            category: AddressCategory::Residential,
            rooms: 2,
            square_meters: 80,
            complement: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn address_type(mut self, address_type: AddressType) -> Self {
        self.address_type = address_type;
        self
    }

    pub fn rooms(mut self, rooms: i32) -> Self {
        self.rooms = rooms;
        self
    }

    pub fn complement(mut self, complement: impl Into<String>) -> Self {
        self.complement = Some(complement.into());
        self
    }

    /// Builds and inserts the address entity into the database.
    pub async fn build(self) -> Result<entity::user_address::Model, DbErr> {
        entity::user_address::ActiveModel {
            id: ActiveValue::Set(self.id),
            user_id: ActiveValue::Set(self.user_id),
            title: ActiveValue::Set(self.title),
            r#type: ActiveValue::Set(self.address_type),
            category: ActiveValue::Set(self.category),
            rooms: ActiveValue::Set(self.rooms),
            square_meters: ActiveValue::Set(self.square_meters),
            zip_code: ActiveValue::Set("01310-100".to_string()),
            state: ActiveValue::Set("SP".to_string()),
            city: ActiveValue::Set("São Paulo".to_string()),
            neighborhood: ActiveValue::Set("Bela Vista".to_string()),
            street: ActiveValue::Set("Avenida Paulista".to_string()),
            number: ActiveValue::Set("1000".to_string()),
            complement: ActiveValue::Set(self.complement),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values for the given user.
pub async fn create_address(
    db: &DatabaseConnection,
    user_id: &str,
) -> Result<entity::user_address::Model, DbErr> {
    UserAddressFactory::new(db, user_id).build().await
}
