//! Technician dashboard service.

use chrono::{Duration, Utc};
use entity::enums::TaskStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{TechnicianDashboardDto, TechnicianStatsDto},
    server::{data::task::TaskRepository, error::AppError, model::task::Task},
};

pub struct TechnicianService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TechnicianService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the technician landing page: work queue stats plus the task
    /// list itself.
    pub async fn dashboard(&self) -> Result<TechnicianDashboardDto, AppError> {
        let tasks = TaskRepository::new(self.db).get_all().await?;

        let today = Utc::now().date_naive();
        let week_ago = today - Duration::days(7);

        let stats = TechnicianStatsDto {
            pending_installations: tasks
                .iter()
                .filter(|t| {
                    t.task_type == "Installation"
                        && matches!(t.status, TaskStatus::Scheduled | TaskStatus::InProgress)
                })
                .count(),
            tasks_due_today: tasks
                .iter()
                .filter(|t| t.scheduled_date == Some(today) && t.status != TaskStatus::Completed)
                .count(),
            upcoming_appointments: tasks
                .iter()
                .filter(|t| {
                    t.status == TaskStatus::Scheduled
                        && t.scheduled_date.is_some_and(|d| d > today)
                })
                .count(),
            completed_this_week: tasks
                .iter()
                .filter(|t| {
                    t.status == TaskStatus::Completed
                        && t.completed_at.is_some_and(|at| at.date_naive() >= week_ago)
                })
                .count(),
        };

        Ok(TechnicianDashboardDto {
            stats,
            tasks: tasks.into_iter().map(Task::into_dto).collect(),
        })
    }
}
