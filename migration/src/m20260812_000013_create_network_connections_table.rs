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
                    .table(NetworkConnections::Table)
                    .if_not_exists()
                    .col(pk_auto(NetworkConnections::Id))
                    .col(integer(NetworkConnections::CustomerId))
                    .col(string_null(NetworkConnections::DeploymentZone))
                    .col(string_null(NetworkConnections::FdhLocation))
                    .col(string_null(NetworkConnections::SplitterPort))
                    .col(string_null(NetworkConnections::OntSerial))
                    .col(string_null(NetworkConnections::RouterSerial))
                    .col(string_null(NetworkConnections::CableLength))
                    .col(string(NetworkConnections::Status).default("Pending"))
                    .col(
                        timestamp(NetworkConnections::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_network_connection_customer_id")
                            .from(NetworkConnections::Table, NetworkConnections::CustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NetworkConnections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NetworkConnections {
    Table,
    Id,
    CustomerId,
    DeploymentZone,
    FdhLocation,
    SplitterPort,
    OntSerial,
    RouterSerial,
    CableLength,
    Status,
    CreatedAt,
}
