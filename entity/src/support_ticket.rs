use sea_orm::entity::prelude::*;

use crate::enums::{TicketPriority, TicketStatus};

/// Customer support ticket.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "support_tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub ticket_id: i32,
    pub customer_id: i32,
    pub issue: String,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub created_at: DateTimeUtc,
    pub resolved_at: Option<DateTimeUtc>,
    pub assigned_to: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
