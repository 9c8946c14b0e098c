//! Deployment task factory for creating test field work.

use crate::factory::helpers::next_id;
use chrono::{DateTime, NaiveDate, Utc};
use entity::enums::TaskStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test deployment tasks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::deployment_task::DeploymentTaskFactory;
///
/// let task = DeploymentTaskFactory::new(&db)
///     .customer_id(customer.customer_id)
///     .technician_id(technician.technician_id)
///     .status(TaskStatus::InProgress)
///     .build()
///     .await?;
/// ```
pub struct DeploymentTaskFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: Option<i32>,
    technician_id: Option<i32>,
    task_type: String,
    status: TaskStatus,
    scheduled_date: Option<NaiveDate>,
    description: Option<String>,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl<'a> DeploymentTaskFactory<'a> {
    /// Creates a new DeploymentTaskFactory with default values.
    ///
    /// Defaults:
    /// - task_type: `"Installation"`
    /// - status: `TaskStatus::Scheduled`
    /// - scheduled_date: today
    /// - description: `"Task {id}"` where id is auto-incremented
    /// - customer, technician: unset
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            customer_id: None,
            technician_id: None,
            task_type: "Installation".to_string(),
            status: TaskStatus::Scheduled,
            scheduled_date: Some(Utc::now().date_naive()),
            description: Some(format!("Task {}", id)),
            completed: false,
            completed_at: None,
        }
    }

    /// Sets the customer the task is for.
    pub fn customer_id(mut self, customer_id: i32) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Sets the assigned technician.
    pub fn technician_id(mut self, technician_id: i32) -> Self {
        self.technician_id = Some(technician_id);
        self
    }

    /// Sets the task type (e.g. "Installation", "Repair").
    pub fn task_type(mut self, task_type: impl Into<String>) -> Self {
        self.task_type = task_type.into();
        self
    }

    /// Sets the task status. `Completed` also stamps `completed_at`.
    pub fn status(mut self, status: TaskStatus) -> Self {
        self.completed = status == TaskStatus::Completed;
        self.status = status;
        self
    }

    /// Sets the scheduled date.
    pub fn scheduled_date(mut self, date: NaiveDate) -> Self {
        self.scheduled_date = Some(date);
        self
    }

    /// Backdates the completion timestamp for already-completed tasks.
    pub fn completed_at(mut self, at: DateTime<Utc>) -> Self {
        self.completed_at = Some(at);
        self
    }

    /// Builds and inserts the deployment task entity into the database.
    pub async fn build(self) -> Result<entity::deployment_task::Model, DbErr> {
        let completed_at = self
            .completed_at
            .or(if self.completed { Some(Utc::now()) } else { None });
        entity::deployment_task::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            technician_id: ActiveValue::Set(self.technician_id),
            task_type: ActiveValue::Set(self.task_type),
            status: ActiveValue::Set(self.status),
            scheduled_date: ActiveValue::Set(self.scheduled_date),
            description: ActiveValue::Set(self.description),
            completed_at: ActiveValue::Set(completed_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a deployment task with default values.
///
/// Shorthand for `DeploymentTaskFactory::new(db).build().await`.
pub async fn create_task(
    db: &DatabaseConnection,
) -> Result<entity::deployment_task::Model, DbErr> {
    DeploymentTaskFactory::new(db).build().await
}
