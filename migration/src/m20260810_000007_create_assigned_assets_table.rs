use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000005_create_customers_table::Customers,
    m20260810_000006_create_assets_table::Assets,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AssignedAssets::Table)
                    .if_not_exists()
                    .col(pk_auto(AssignedAssets::Id))
                    .col(integer(AssignedAssets::CustomerId))
                    .col(integer(AssignedAssets::AssetId))
                    .col(
                        timestamp(AssignedAssets::AssignedOn)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assigned_asset_customer_id")
                            .from(AssignedAssets::Table, AssignedAssets::CustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assigned_asset_asset_id")
                            .from(AssignedAssets::Table, AssignedAssets::AssetId)
                            .to(Assets::Table, Assets::AssetId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssignedAssets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AssignedAssets {
    Table,
    Id,
    CustomerId,
    AssetId,
    AssignedOn,
}
