//! Deployment task data repository.
//!
//! Task listings always show customer and technician names, so the list
//! queries fetch the referenced rows in bulk and assemble the joined domain
//! model in memory rather than issuing a lookup per task.

use std::collections::HashMap;

use entity::enums::TaskStatus;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::task::{CreateTaskParams, Task};

/// Repository providing database operations for deployment tasks.
pub struct TaskRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TaskRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new deployment task.
    pub async fn create(
        &self,
        params: CreateTaskParams,
    ) -> Result<entity::deployment_task::Model, DbErr> {
        entity::prelude::DeploymentTask::insert(entity::deployment_task::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            technician_id: ActiveValue::Set(params.technician_id),
            task_type: ActiveValue::Set(params.task_type),
            status: ActiveValue::Set(params.status),
            scheduled_date: ActiveValue::Set(params.scheduled_date),
            description: ActiveValue::Set(params.description),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        task_id: i32,
    ) -> Result<Option<entity::deployment_task::Model>, DbErr> {
        entity::prelude::DeploymentTask::find_by_id(task_id)
            .one(self.db)
            .await
    }

    /// Lists all tasks with customer and technician names resolved, newest
    /// first.
    pub async fn get_all(&self) -> Result<Vec<Task>, DbErr> {
        let entities = entity::prelude::DeploymentTask::find()
            .order_by_desc(entity::deployment_task::Column::TaskId)
            .all(self.db)
            .await?;

        self.resolve_names(entities).await
    }

    /// Counts tasks in one status.
    pub async fn count_by_status(&self, status: TaskStatus) -> Result<u64, DbErr> {
        entity::prelude::DeploymentTask::find()
            .filter(entity::deployment_task::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::DeploymentTask::find().count(self.db).await
    }

    /// Updates a task's status. Completion stamps `completed_at`; moving a
    /// completed task back clears it.
    pub async fn set_status(&self, task_id: i32, status: TaskStatus) -> Result<(), DbErr> {
        let completed_at = if status == TaskStatus::Completed {
            Some(chrono::Utc::now())
        } else {
            None
        };

        entity::prelude::DeploymentTask::update_many()
            .filter(entity::deployment_task::Column::TaskId.eq(task_id))
            .col_expr(
                entity::deployment_task::Column::Status,
                sea_orm::sea_query::Expr::value(status),
            )
            .col_expr(
                entity::deployment_task::Column::CompletedAt,
                sea_orm::sea_query::Expr::value(completed_at),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Resolves customer and technician names for a page of tasks with two
    /// bulk lookups.
    async fn resolve_names(
        &self,
        entities: Vec<entity::deployment_task::Model>,
    ) -> Result<Vec<Task>, DbErr> {
        let customer_ids: Vec<i32> = entities.iter().filter_map(|t| t.customer_id).collect();
        let technician_ids: Vec<i32> = entities.iter().filter_map(|t| t.technician_id).collect();

        let customers: HashMap<i32, entity::customer::Model> = if customer_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Customer::find()
                .filter(entity::customer::Column::CustomerId.is_in(customer_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|c| (c.customer_id, c))
                .collect()
        };

        let technicians: HashMap<i32, entity::technician::Model> = if technician_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Technician::find()
                .filter(entity::technician::Column::TechnicianId.is_in(technician_ids))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.technician_id, t))
                .collect()
        };

        Ok(entities
            .into_iter()
            .map(|task| {
                let customer = task.customer_id.and_then(|id| customers.get(&id));

                Task {
                    task_id: task.task_id,
                    task_type: task.task_type,
                    customer_name: customer
                        .map(|c| c.name.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    customer_address: customer
                        .and_then(|c| c.address.clone())
                        .unwrap_or_default(),
                    technician_name: task
                        .technician_id
                        .and_then(|id| technicians.get(&id))
                        .map(|t| t.name.clone()),
                    description: task.description,
                    status: task.status,
                    scheduled_date: task.scheduled_date,
                    completed_at: task.completed_at,
                }
            })
            .collect())
    }
}
