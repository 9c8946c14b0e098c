use crate::server::service::support::SupportService;
use entity::enums::{TicketPriority, TicketStatus};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests the support dashboard metrics and ticket listing.
///
/// Creates two customers and three tickets: one open, one resolved today and
/// one closed. Only tickets resolved on the current day count toward
/// `resolved_today`.
///
/// Expected: Ok with one open ticket, two resolved today, both customers
/// listed and ticket customer names resolved
#[tokio::test]
async fn dashboard_counts_tickets_and_resolves_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .with_table(entity::prelude::SupportTicket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer_a = factory::customer::create_customer(db).await?;
    let customer_b = factory::customer::create_customer(db).await?;

    factory::support_ticket::create_ticket(db, customer_a.customer_id).await?;
    factory::support_ticket::SupportTicketFactory::new(db, customer_a.customer_id)
        .priority(TicketPriority::High)
        .status(TicketStatus::Resolved)
        .build()
        .await?;
    factory::support_ticket::SupportTicketFactory::new(db, customer_b.customer_id)
        .status(TicketStatus::Closed)
        .build()
        .await?;

    let service = SupportService::new(db);
    let dashboard = service.dashboard().await.unwrap();

    assert_eq!(dashboard.metrics.open_tickets, 1);
    assert_eq!(dashboard.metrics.resolved_today, 2);
    assert_eq!(dashboard.metrics.total_customers, 2);
    assert_eq!(dashboard.customers.len(), 2);
    assert_eq!(dashboard.recent_tickets.len(), 3);
    assert!(dashboard
        .recent_tickets
        .iter()
        .any(|t| t.customer_name == customer_b.name));

    Ok(())
}

/// Tests the dashboard with no data.
///
/// Expected: Ok with zeroed metrics and empty lists
#[tokio::test]
async fn dashboard_handles_empty_database() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .with_table(entity::prelude::SupportTicket)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let dashboard = SupportService::new(db).dashboard().await.unwrap();

    assert_eq!(dashboard.metrics.open_tickets, 0);
    assert_eq!(dashboard.metrics.resolved_today, 0);
    assert_eq!(dashboard.metrics.total_customers, 0);
    assert!(dashboard.customers.is_empty());
    assert!(dashboard.recent_tickets.is_empty());

    Ok(())
}
