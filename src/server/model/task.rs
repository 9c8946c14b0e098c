//! Deployment task domain models and parameters.

use chrono::{DateTime, NaiveDate, Utc};
use entity::enums::TaskStatus;
use sea_orm::ActiveEnum;

use crate::model::task::{ChecklistItemDto, TaskDto, TaskNoteDto, TechnicianDto};

/// Deployment task with its customer and technician names already joined in.
///
/// The task list endpoints always display names rather than ids, so the
/// repository resolves them in the query instead of forcing N+1 lookups.
#[derive(Debug, Clone)]
pub struct Task {
    pub task_id: i32,
    pub task_type: String,
    pub customer_name: String,
    pub customer_address: String,
    pub technician_name: Option<String>,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn into_dto(self) -> TaskDto {
        TaskDto {
            task_id: self.task_id,
            task_type: self.task_type,
            customer_name: self.customer_name,
            customer_address: self.customer_address,
            technician_name: self.technician_name,
            description: self.description,
            status: self.status.to_value(),
            scheduled_date: self.scheduled_date,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Technician {
    pub technician_id: i32,
    pub name: String,
    pub contact: Option<String>,
    pub region: Option<String>,
}

impl Technician {
    pub fn from_entity(entity: entity::technician::Model) -> Self {
        Self {
            technician_id: entity.technician_id,
            name: entity.name,
            contact: entity.contact,
            region: entity.region,
        }
    }

    pub fn into_dto(self) -> TechnicianDto {
        TechnicianDto {
            technician_id: self.technician_id,
            name: self.name,
            contact: self.contact,
            region: self.region,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChecklistItem {
    pub id: i32,
    pub item: String,
    pub completed: bool,
}

impl ChecklistItem {
    pub fn from_entity(entity: entity::task_checklist::Model) -> Self {
        Self {
            id: entity.id,
            item: entity.item,
            completed: entity.completed,
        }
    }

    pub fn into_dto(self) -> ChecklistItemDto {
        ChecklistItemDto {
            id: self.id,
            item: self.item,
            completed: self.completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TaskNote {
    pub id: i32,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl TaskNote {
    pub fn from_entity(entity: entity::task_note::Model) -> Self {
        Self {
            id: entity.id,
            content: entity.content,
            author: entity.author,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> TaskNoteDto {
        TaskNoteDto {
            id: self.id,
            content: self.content,
            author: self.author,
            created_at: self.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// Parameters for creating a deployment task.
pub struct CreateTaskParams {
    pub customer_id: Option<i32>,
    pub technician_id: Option<i32>,
    pub task_type: String,
    pub status: TaskStatus,
    pub scheduled_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// A single item in a checklist replacement, ordered by position in the
/// submitted list.
pub struct ChecklistItemParams {
    pub item: String,
    pub completed: bool,
}
