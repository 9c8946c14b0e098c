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
                    .table(TaskChecklists::Table)
                    .if_not_exists()
                    .col(pk_auto(TaskChecklists::Id))
                    .col(integer(TaskChecklists::TaskId))
                    .col(string(TaskChecklists::Item))
                    .col(boolean(TaskChecklists::Completed).default(false))
                    .col(integer(TaskChecklists::DisplayOrder))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_task_checklist_task_id")
                            .from(TaskChecklists::Table, TaskChecklists::TaskId)
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
            .drop_table(Table::drop().table(TaskChecklists::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TaskChecklists {
    Table,
    Id,
    TaskId,
    Item,
    Completed,
    DisplayOrder,
}
