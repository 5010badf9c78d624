//! Shared helper utilities for factory methods.
//!
//! Provides ID generation used across all factory modules and convenience methods for
//! creating entities together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a unique string id with a readable prefix, e.g. `user-42`.
pub fn next_string_id(prefix: &str) -> String {
    format!("{}-{}", prefix, next_id())
}

/// Creates a schedule hierarchy with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (the customer)
/// 2. UserAddress owned by the user
/// 3. Diarist
/// 4. Schedule in the `active` status
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, address, diarist, schedule))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_schedule_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user_address::Model,
        entity::diarist::Model,
        entity::schedule::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let address = crate::factory::user_address::create_address(db, &user.id).await?;
    let diarist = crate::factory::diarist::create_diarist(db).await?;
    let schedule =
        crate::factory::schedule::create_schedule(db, &user.id, &diarist.id, &address.id).await?;

    Ok((user, address, diarist, schedule))
}
