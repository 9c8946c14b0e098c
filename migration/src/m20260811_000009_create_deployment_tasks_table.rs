use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260810_000005_create_customers_table::Customers,
    m20260810_000008_create_technicians_table::Technicians,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DeploymentTasks::Table)
                    .if_not_exists()
                    .col(pk_auto(DeploymentTasks::TaskId))
                    .col(integer_null(DeploymentTasks::CustomerId))
                    .col(integer_null(DeploymentTasks::TechnicianId))
                    .col(string(DeploymentTasks::TaskType))
                    .col(string(DeploymentTasks::Status).default("Scheduled"))
                    .col(date_null(DeploymentTasks::ScheduledDate))
                    .col(text_null(DeploymentTasks::Description))
                    .col(timestamp_null(DeploymentTasks::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deployment_task_customer_id")
                            .from(DeploymentTasks::Table, DeploymentTasks::CustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_deployment_task_technician_id")
                            .from(DeploymentTasks::Table, DeploymentTasks::TechnicianId)
                            .to(Technicians::Table, Technicians::TechnicianId)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DeploymentTasks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DeploymentTasks {
    Table,
    TaskId,
    CustomerId,
    TechnicianId,
    TaskType,
    Status,
    ScheduledDate,
    Description,
    CompletedAt,
}
