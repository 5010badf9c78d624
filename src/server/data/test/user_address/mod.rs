use crate::server::{
    data::user_address::UserAddressRepository, model::address::UpdateUserAddressParam,
};
use entity::sea_orm_active_enums::AddressType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
