//! Migration: Create schools table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schools::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schools::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Unique index is the final arbiter of concurrent signups
                    .col(ColumnDef::new(Schools::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Schools::SchoolName).string().null())
                    .col(ColumnDef::new(Schools::ContactName).string().null())
                    .col(ColumnDef::new(Schools::ContactEmail).string().null())
                    .col(ColumnDef::new(Schools::WebAddress).string().null())
                    .col(ColumnDef::new(Schools::Sector).string().null())
                    .col(ColumnDef::new(Schools::YearLevels).string().null())
                    .col(ColumnDef::new(Schools::Image).text().null())
                    .col(
                        ColumnDef::new(Schools::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Schools::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schools::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Schools {
    Table,
    Id,
    Email,
    SchoolName,
    ContactName,
    ContactEmail,
    WebAddress,
    Sector,
    YearLevels,
    Image,
    CreatedAt,
    UpdatedAt,
}
