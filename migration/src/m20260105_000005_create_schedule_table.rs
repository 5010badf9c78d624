use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000002_create_user_table::User, m20260105_000003_create_user_address_table::UserAddress,
    m20260105_000004_create_diarist_table::Diarist,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(string(Schedule::Id).primary_key())
                    .col(string(Schedule::UserId))
                    .col(string(Schedule::DiaristId))
                    .col(string(Schedule::AddressId))
                    .col(timestamp_with_time_zone(Schedule::Date))
                    .col(integer(Schedule::Price))
                    .col(string_len(Schedule::Status, 16).default("active"))
                    .col(
                        timestamp_with_time_zone(Schedule::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_user_id")
                            .from(Schedule::Table, Schedule::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_diarist_id")
                            .from(Schedule::Table, Schedule::DiaristId)
                            .to(Diarist::Table, Diarist::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedule_address_id")
                            .from(Schedule::Table, Schedule::AddressId)
                            .to(UserAddress::Table, UserAddress::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Schedule {
    Table,
    Id,
    UserId,
    DiaristId,
    AddressId,
    Date,
    Price,
    Status,
    CreatedAt,
}
