//! SeaORM entity definitions for the marinetes database.

pub mod prelude;

pub mod diarist;
pub mod employee;
pub mod schedule;
pub mod sea_orm_active_enums;
pub mod user;
pub mod user_address;
