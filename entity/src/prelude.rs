pub use super::diarist::Entity as Diarist;
pub use super::employee::Entity as Employee;
pub use super::schedule::Entity as Schedule;
pub use super::user::Entity as User;
pub use super::user_address::Entity as UserAddress;
