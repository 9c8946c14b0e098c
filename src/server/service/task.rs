//! Deployment task service.

use entity::enums::TaskStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::task::{TaskDetailsDto, UpdateChecklistDto},
    server::{
        data::{
            task::TaskRepository, task_checklist::ChecklistRepository,
            task_note::TaskNoteRepository, technician::TechnicianRepository,
        },
        error::AppError,
        model::task::{ChecklistItem, ChecklistItemParams, Task, TaskNote, Technician},
        service::{audit::AuditService, customer::INSTALLATION_CHECKLIST},
    },
};

pub struct TaskService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TaskService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all deployment tasks with customer and technician names.
    pub async fn get_all(&self) -> Result<Vec<Task>, AppError> {
        Ok(TaskRepository::new(self.db).get_all().await?)
    }

    /// Lists all technicians.
    pub async fn technicians(&self) -> Result<Vec<Technician>, AppError> {
        Ok(TechnicianRepository::new(self.db).get_all().await?)
    }

    /// Returns a task's checklist and notes.
    ///
    /// Installation tasks created before checklist seeding existed have no
    /// items; the default installation checklist is seeded on first read so
    /// the detail view is never empty for them.
    pub async fn details(&self, task_id: i32) -> Result<TaskDetailsDto, AppError> {
        let task_repo = TaskRepository::new(self.db);
        let checklist_repo = ChecklistRepository::new(self.db);
        let note_repo = TaskNoteRepository::new(self.db);

        let Some(task) = task_repo.find_by_id(task_id).await? else {
            return Err(AppError::NotFound("Task not found".to_string()));
        };

        let mut checklist = checklist_repo.find_by_task(task_id).await?;
        if checklist.is_empty() && task.task_type == "Installation" {
            checklist_repo.seed(task_id, INSTALLATION_CHECKLIST).await?;
            checklist = checklist_repo.find_by_task(task_id).await?;
        }

        let notes = note_repo.find_by_task(task_id).await?;

        Ok(TaskDetailsDto {
            checklist: checklist.into_iter().map(ChecklistItem::into_dto).collect(),
            notes: notes.into_iter().map(TaskNote::into_dto).collect(),
        })
    }

    /// Sets a task's status. Completion stamps `completed_at`.
    pub async fn update_status(
        &self,
        task_id: i32,
        status: &str,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let status = TaskStatus::try_from_value(&status.to_string())
            .map_err(|_| AppError::BadRequest(format!("Unknown task status '{}'", status)))?;

        let repo = TaskRepository::new(self.db);

        if repo.find_by_id(task_id).await?.is_none() {
            return Err(AppError::NotFound("Task not found".to_string()));
        }

        repo.set_status(task_id, status).await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "TASK_STATUS_UPDATED",
                &format!("Task #{} set to {}", task_id, status.to_value()),
            )
            .await;

        Ok(())
    }

    /// Replaces a task's checklist wholesale.
    pub async fn update_checklist(
        &self,
        task_id: i32,
        dto: UpdateChecklistDto,
    ) -> Result<(), AppError> {
        if TaskRepository::new(self.db)
            .find_by_id(task_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Task not found".to_string()));
        }

        let items = dto
            .checklist
            .into_iter()
            .map(|item| ChecklistItemParams {
                item: item.item,
                completed: item.completed,
            })
            .collect();

        ChecklistRepository::new(self.db)
            .replace(task_id, items)
            .await?;

        Ok(())
    }

    /// Appends a note to a task, attributed to the given author.
    pub async fn add_note(
        &self,
        task_id: i32,
        content: String,
        author: String,
    ) -> Result<TaskNote, AppError> {
        if content.trim().is_empty() {
            return Err(AppError::BadRequest("Note content is empty".to_string()));
        }

        if TaskRepository::new(self.db)
            .find_by_id(task_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Task not found".to_string()));
        }

        Ok(TaskNoteRepository::new(self.db)
            .create(task_id, content, author)
            .await?)
    }
}
