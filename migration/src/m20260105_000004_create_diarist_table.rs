use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Diarist::Table)
                    .if_not_exists()
                    .col(string(Diarist::Id).primary_key())
                    .col(string(Diarist::Name))
                    .col(string_uniq(Diarist::Email))
                    .col(text_null(Diarist::Avatar))
                    .col(
                        timestamp_with_time_zone(Diarist::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Diarist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Diarist {
    Table,
    Id,
    Name,
    Email,
    Avatar,
    CreatedAt,
}
