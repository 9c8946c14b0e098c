use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000005_create_customers_table::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Assets::Table)
                    .if_not_exists()
                    .col(pk_auto(Assets::AssetId))
                    .col(string(Assets::AssetType))
                    .col(string_null(Assets::Model))
                    .col(string_null(Assets::SerialNumber).unique_key())
                    .col(string(Assets::Status).default("Available"))
                    .col(string_null(Assets::Location))
                    .col(integer_null(Assets::AssignedToCustomerId))
                    .col(timestamp_null(Assets::AssignedDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_asset_assigned_customer_id")
                            .from(Assets::Table, Assets::AssignedToCustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Assets {
    Table,
    AssetId,
    AssetType,
    Model,
    SerialNumber,
    Status,
    Location,
    AssignedToCustomerId,
    AssignedDate,
}
