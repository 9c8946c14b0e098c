use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000002_create_headends_table::Headends;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fdhs::Table)
                    .if_not_exists()
                    .col(pk_auto(Fdhs::FdhId))
                    .col(string(Fdhs::Name))
                    .col(string_null(Fdhs::Location))
                    .col(string_null(Fdhs::Region))
                    .col(integer_null(Fdhs::MaxPorts))
                    .col(integer_null(Fdhs::HeadendId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fdh_headend_id")
                            .from(Fdhs::Table, Fdhs::HeadendId)
                            .to(Headends::Table, Headends::HeadendId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Fdhs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Fdhs {
    Table,
    FdhId,
    Name,
    Location,
    Region,
    MaxPorts,
    HeadendId,
}
