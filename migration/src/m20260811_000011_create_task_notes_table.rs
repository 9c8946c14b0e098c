use sea_orm_migration::{prelude::*, schema::*};

use super::m20260811_000009_create_deployment_tasks_table::DeploymentTasks;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TaskNotes::Table)
                    .if_not_exists()
                    .col(pk_auto(TaskNotes::Id))
                    .col(integer(TaskNotes::TaskId))
                    .col(text(TaskNotes::Content))
                    .col(string(TaskNotes::Author))
                    .col(
                        timestamp(TaskNotes::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_note_task_id")
                            .from(TaskNotes::Table, TaskNotes::TaskId)
                            .to(DeploymentTasks::Table, DeploymentTasks::TaskId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TaskNotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TaskNotes {
    Table,
    Id,
    TaskId,
    Content,
    Author,
    CreatedAt,
}
