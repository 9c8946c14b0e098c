use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000003_create_fdhs_table::Fdhs;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Splitters::Table)
                    .if_not_exists()
                    .col(pk_auto(Splitters::SplitterId))
                    .col(integer_null(Splitters::FdhId))
                    .col(string_null(Splitters::Model))
                    .col(integer(Splitters::PortCapacity))
                    .col(integer(Splitters::UsedPorts).default(0))
                    .col(string_null(Splitters::Location))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_splitter_fdh_id")
                            .from(Splitters::Table, Splitters::FdhId)
                            .to(Fdhs::Table, Fdhs::FdhId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Splitters::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Splitters {
    Table,
    SplitterId,
    FdhId,
    Model,
    PortCapacity,
    UsedPorts,
    Location,
}
