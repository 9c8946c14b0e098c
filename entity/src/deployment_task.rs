use sea_orm::entity::prelude::*;

use crate::enums::TaskStatus;

/// Unit of field work (installation, repair, ...) scheduled for a technician.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "deployment_tasks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub task_id: i32,
    pub customer_id: Option<i32>,
    pub technician_id: Option<i32>,
    pub task_type: String,
    pub status: TaskStatus,
    pub scheduled_date: Option<Date>,
    pub description: Option<String>,
    pub completed_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
