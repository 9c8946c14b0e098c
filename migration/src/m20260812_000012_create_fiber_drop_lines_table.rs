use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000004_create_splitters_table::Splitters,
    m20260810_000005_create_customers_table::Customers,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FiberDropLines::Table)
                    .if_not_exists()
                    .col(pk_auto(FiberDropLines::LineId))
                    .col(integer_null(FiberDropLines::FromSplitterId))
                    .col(integer_null(FiberDropLines::ToCustomerId))
                    .col(double_null(FiberDropLines::LengthMeters))
                    .col(string(FiberDropLines::Status).default("Active"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_drop_line_splitter_id")
                            .from(FiberDropLines::Table, FiberDropLines::FromSplitterId)
                            .to(Splitters::Table, Splitters::SplitterId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_drop_line_customer_id")
                            .from(FiberDropLines::Table, FiberDropLines::ToCustomerId)
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
            .drop_table(Table::drop().table(FiberDropLines::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FiberDropLines {
    Table,
    LineId,
    FromSplitterId,
    ToCustomerId,
    LengthMeters,
    Status,
}
