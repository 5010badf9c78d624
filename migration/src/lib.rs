pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_employee_table;
mod m20260105_000002_create_user_table;
mod m20260105_000003_create_user_address_table;
mod m20260105_000004_create_diarist_table;
mod m20260105_000005_create_schedule_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_employee_table::Migration),
            Box::new(m20260105_000002_create_user_table::Migration),
            Box::new(m20260105_000003_create_user_address_table::Migration),
            Box::new(m20260105_000004_create_diarist_table::Migration),
            Box::new(m20260105_000005_create_schedule_table::Migration),
        ]
    }
}
