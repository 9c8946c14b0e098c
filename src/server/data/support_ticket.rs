//! Support ticket data repository.

use entity::enums::TicketStatus;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository providing database operations for support tickets.
pub struct SupportTicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupportTicketRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Lists all tickets, newest first.
    pub async fn get_all(&self) -> Result<Vec<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find()
            .order_by_desc(entity::support_ticket::Column::TicketId)
            .all(self.db)
            .await
    }

    pub async fn count_by_status(&self, status: TicketStatus) -> Result<u64, DbErr> {
        entity::prelude::SupportTicket::find()
            .filter(entity::support_ticket::Column::Status.eq(status))
            .count(self.db)
            .await
    }
}
