use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Deployment task row with customer and technician names resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskDto {
    pub task_id: i32,
    pub task_type: String,
    pub customer_name: String,
    pub customer_address: String,
    pub technician_name: Option<String>,
    pub description: Option<String>,
    pub status: String,
    pub scheduled_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TechnicianDto {
    pub technician_id: i32,
    pub name: String,
    pub contact: Option<String>,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChecklistItemDto {
    pub id: i32,
    pub item: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskNoteDto {
    pub id: i32,
    pub content: String,
    pub author: String,
    /// `YYYY-MM-DD HH:MM:SS`, matching the frontend's display format.
    pub created_at: String,
}

/// Checklist and notes for one task.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TaskDetailsDto {
    pub checklist: Vec<ChecklistItemDto>,
    pub notes: Vec<TaskNoteDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTaskStatusDto {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateChecklistItemDto {
    pub item: String,
    pub completed: bool,
}

/// Full replacement of a task's checklist; items keep the given order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateChecklistDto {
    pub checklist: Vec<UpdateChecklistItemDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTaskNoteDto {
    pub content: String,
}
