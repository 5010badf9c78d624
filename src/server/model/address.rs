//! User address domain models and parameters.

use entity::sea_orm_active_enums::{AddressCategory, AddressType};

use crate::model::address::{
    AddressCategoryDto, AddressTypeDto, UpdateUserAddressDto, UserAddressDto,
};

/// Address where a user books schedules.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAddress {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub address_type: AddressType,
    pub category: AddressCategory,
    pub rooms: i32,
    pub square_meters: i32,
    pub zip_code: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
    pub number: String,
    pub complement: Option<String>,
}

impl UserAddress {
    pub fn into_dto(self) -> UserAddressDto {
        UserAddressDto {
            id: self.id,
            title: self.title,
            address_type: match self.address_type {
                AddressType::House => AddressTypeDto::House,
                AddressType::Apartment => AddressTypeDto::Apartment,
            },
            category: match self.category {
                AddressCategory::Residential => AddressCategoryDto::Residential,
                AddressCategory::Commercial => AddressCategoryDto::Commercial,
            },
            rooms: self.rooms,
            square_meters: self.square_meters,
            zip_code: self.zip_code,
            state: self.state,
            city: self.city,
            neighborhood: self.neighborhood,
            street: self.street,
            number: self.number,
            complement: self.complement,
        }
    }

    pub fn from_entity(entity: entity::user_address::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            address_type: entity.r#type,
            category: entity.category,
            rooms: entity.rooms,
            square_meters: entity.square_meters,
            zip_code: entity.zip_code,
            state: entity.state,
            city: entity.city,
            neighborhood: entity.neighborhood,
            street: entity.street,
            number: entity.number,
            complement: entity.complement,
        }
    }
}

/// Partial update of an address. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserAddressParam {
    pub title: Option<String>,
    pub address_type: Option<AddressType>,
    pub category: Option<AddressCategory>,
    pub rooms: Option<i32>,
    pub square_meters: Option<i32>,
    pub zip_code: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub street: Option<String>,
    pub number: Option<String>,
    pub complement: Option<String>,
}

impl UpdateUserAddressParam {
    pub fn from_dto(dto: UpdateUserAddressDto) -> Self {
        Self {
            title: dto.title,
            address_type: dto.address_type.map(|address_type| match address_type {
                AddressTypeDto::House => AddressType::House,
                AddressTypeDto::Apartment => AddressType::Apartment,
            }),
            category: dto.category.map(|category| match category {
                AddressCategoryDto::Residential => AddressCategory::Residential,
                AddressCategoryDto::Commercial => AddressCategory::Commercial,
            }),
            rooms: dto.rooms,
            square_meters: dto.square_meters,
            zip_code: dto.zip_code,
            state: dto.state,
            city: dto.city,
            neighborhood: dto.neighborhood,
            street: dto.street,
            number: dto.number,
            complement: dto.complement,
        }
    }

    /// Whether the update carries no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks field-level constraints.
    ///
    /// # Returns
    /// - `Ok(())` - Every provided field is acceptable
    /// - `Err(String)` - Message describing the first invalid field
    pub fn validate(&self) -> Result<(), String> {
        let required_text = [
            ("title", &self.title),
            ("zip_code", &self.zip_code),
            ("state", &self.state),
            ("city", &self.city),
            ("neighborhood", &self.neighborhood),
            ("street", &self.street),
            ("number", &self.number),
        ];

        for (name, value) in required_text {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(format!("Field '{}' cannot be empty", name));
            }
        }

        if self.rooms.is_some_and(|rooms| rooms < 0) {
            return Err("Field 'rooms' cannot be negative".to_string());
        }

        if self.square_meters.is_some_and(|square_meters| square_meters < 0) {
            return Err("Field 'square_meters' cannot be negative".to_string());
        }

        Ok(())
    }
}
