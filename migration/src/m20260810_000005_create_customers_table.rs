use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000004_create_splitters_table::Splitters;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(pk_auto(Customers::CustomerId))
                    .col(string(Customers::Name))
                    .col(text_null(Customers::Address))
                    .col(string_null(Customers::Neighborhood))
                    .col(string_null(Customers::Plan))
                    .col(string_null(Customers::ConnectionType))
                    .col(string(Customers::Status).default("Pending"))
                    .col(integer_null(Customers::SplitterId))
                    .col(integer_null(Customers::AssignedPort))
                    .col(
                        timestamp(Customers::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_splitter_id")
                            .from(Customers::Table, Customers::SplitterId)
                            .to(Splitters::Table, Splitters::SplitterId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Customers {
    Table,
    CustomerId,
    Name,
    Address,
    Neighborhood,
    Plan,
    ConnectionType,
    Status,
    SplitterId,
    AssignedPort,
    CreatedAt,
}
