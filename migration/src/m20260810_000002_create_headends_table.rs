use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Headends::Table)
                    .if_not_exists()
                    .col(pk_auto(Headends::HeadendId))
                    .col(string(Headends::Name))
                    .col(string_null(Headends::Location))
                    .col(string_null(Headends::Region))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Headends::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Headends {
    Table,
    HeadendId,
    Name,
    Location,
    Region,
}
