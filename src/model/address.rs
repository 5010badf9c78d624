use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AddressTypeDto {
    House,
    Apartment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AddressCategoryDto {
    Residential,
    Commercial,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserAddressDto {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub address_type: AddressTypeDto,
    pub category: AddressCategoryDto,
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

/// Partial address update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateUserAddressDto {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub address_type: Option<AddressTypeDto>,
    pub category: Option<AddressCategoryDto>,
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
