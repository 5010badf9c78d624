use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAddress::Table)
                    .if_not_exists()
                    .col(string(UserAddress::Id).primary_key())
                    .col(string(UserAddress::UserId))
                    .col(string(UserAddress::Title))
                    .col(string_len(UserAddress::Type, 16))
                    .col(string_len(UserAddress::Category, 16))
                    .col(integer(UserAddress::Rooms))
                    .col(integer(UserAddress::SquareMeters))
                    .col(string(UserAddress::ZipCode))
                    .col(string(UserAddress::State))
                    .col(string(UserAddress::City))
                    .col(string(UserAddress::Neighborhood))
                    .col(string(UserAddress::Street))
                    .col(string(UserAddress::Number))
                    .col(string_null(UserAddress::Complement))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_address_user_id")
                            .from(UserAddress::Table, UserAddress::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_address_user_id")
                    .table(UserAddress::Table)
                    .col(UserAddress::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAddress::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAddress {
    Table,
    Id,
    UserId,
    Title,
    Type,
    Category,
    Rooms,
    SquareMeters,
    ZipCode,
    State,
    City,
    Neighborhood,
    Street,
    Number,
    Complement,
}
