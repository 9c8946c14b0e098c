//! Support dashboard service.

use std::collections::HashMap;

use chrono::Utc;
use entity::enums::TicketStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::dashboard::{SupportDashboardDto, SupportMetricsDto, SupportTicketDto},
    server::{
        data::{customer::CustomerRepository, support_ticket::SupportTicketRepository},
        error::AppError,
        model::customer::Customer,
    },
};

const RECENT_TICKETS: usize = 20;

pub struct SupportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the support landing page: ticket metrics, the customer list
    /// and recent tickets with customer names resolved.
    pub async fn dashboard(&self) -> Result<SupportDashboardDto, AppError> {
        let ticket_repo = SupportTicketRepository::new(self.db);
        let customer_repo = CustomerRepository::new(self.db);

        let customers = customer_repo.get_all().await?;

        let today = Utc::now().date_naive();
        let tickets = ticket_repo.get_all().await?;
        let resolved_today = tickets
            .iter()
            .filter(|t| {
                t.resolved_at
                    .is_some_and(|resolved| resolved.date_naive() == today)
            })
            .count() as u64;

        let metrics = SupportMetricsDto {
            open_tickets: ticket_repo.count_by_status(TicketStatus::Open).await?,
            resolved_today,
            total_customers: customers.len() as u64,
        };

        let customer_names: HashMap<i32, String> = customers
            .iter()
            .map(|c| (c.customer_id, c.name.clone()))
            .collect();

        let recent_tickets = tickets
            .into_iter()
            .take(RECENT_TICKETS)
            .map(|t| SupportTicketDto {
                ticket_id: t.ticket_id,
                customer_name: customer_names
                    .get(&t.customer_id)
                    .cloned()
                    .unwrap_or_else(|| "Unknown".to_string()),
                issue: t.issue,
                priority: t.priority.to_value(),
                status: t.status.to_value(),
                created_at: t.created_at,
            })
            .collect();

        Ok(SupportDashboardDto {
            metrics,
            customers: customers.into_iter().map(Customer::into_dto).collect(),
            recent_tickets,
        })
    }
}
