//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let address = factory::user_address::create_address(&db, &user.id).await?;
//!
//!     // Create a schedule with every record it references
//!     let (user, address, diarist, schedule) =
//!         factory::helpers::create_schedule_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let schedule = factory::schedule::ScheduleFactory::new(&db, &user.id, &diarist.id, &address.id)
//!     .status(ScheduleStatus::Working)
//!     .build()
//!     .await?;
//! ```

pub mod diarist;
pub mod employee;
pub mod helpers;
pub mod schedule;
pub mod user;
pub mod user_address;

pub use diarist::create_diarist;
pub use employee::create_employee;
pub use schedule::create_schedule;
pub use user::create_user;
pub use user_address::create_address;
