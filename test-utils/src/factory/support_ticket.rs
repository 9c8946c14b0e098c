//! Support ticket factory for creating test tickets.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::enums::{TicketPriority, TicketStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test support tickets with customizable fields.
pub struct SupportTicketFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    issue: String,
    priority: TicketPriority,
    status: TicketStatus,
    resolved_at: Option<DateTime<Utc>>,
}

impl<'a> SupportTicketFactory<'a> {
    /// Creates a new SupportTicketFactory with default values.
    ///
    /// Defaults:
    /// - issue: `"Issue {id}"` where id is auto-incremented
    /// - priority: `TicketPriority::Medium`
    /// - status: `TicketStatus::Open`
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `customer_id` - Customer the ticket belongs to
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            customer_id,
            issue: format!("Issue {}", id),
            priority: TicketPriority::Medium,
            status: TicketStatus::Open,
            resolved_at: None,
        }
    }

    /// Sets the priority.
    pub fn priority(mut self, priority: TicketPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the status. `Resolved` and `Closed` also stamp `resolved_at`.
    pub fn status(mut self, status: TicketStatus) -> Self {
        self.resolved_at = match status {
            TicketStatus::Resolved | TicketStatus::Closed => Some(Utc::now()),
            _ => None,
        };
        self.status = status;
        self
    }

    /// Builds and inserts the support ticket entity into the database.
    pub async fn build(self) -> Result<entity::support_ticket::Model, DbErr> {
        entity::support_ticket::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            issue: ActiveValue::Set(self.issue),
            priority: ActiveValue::Set(self.priority),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(self.resolved_at),
            assigned_to: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket for the given customer with default values.
///
/// Shorthand for `SupportTicketFactory::new(db, customer_id).build().await`.
pub async fn create_ticket(
    db: &DatabaseConnection,
    customer_id: i32,
) -> Result<entity::support_ticket::Model, DbErr> {
    SupportTicketFactory::new(db, customer_id).build().await
}
