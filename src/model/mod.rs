//! API data transfer objects.
//!
//! These types define the JSON bodies exchanged with clients. Server-side domain models
//! convert into them at the controller boundary.

pub mod address;
pub mod api;
pub mod diarist;
pub mod employee;
pub mod schedule;
pub mod user;
