use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Technicians::Table)
                    .if_not_exists()
                    .col(pk_auto(Technicians::TechnicianId))
                    .col(string(Technicians::Name))
                    .col(string_null(Technicians::Contact))
                    .col(string_null(Technicians::Region))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Technicians::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Technicians {
    Table,
    TechnicianId,
    Name,
    Contact,
    Region,
}
