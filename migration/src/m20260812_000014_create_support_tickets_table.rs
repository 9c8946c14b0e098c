use sea_orm_migration::{prelude::*, schema::*};

use super::m20260810_000005_create_customers_table::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SupportTickets::Table)
                    .if_not_exists()
                    .col(pk_auto(SupportTickets::TicketId))
                    .col(integer(SupportTickets::CustomerId))
                    .col(text(SupportTickets::Issue))
                    .col(string(SupportTickets::Priority))
                    .col(string(SupportTickets::Status).default("Open"))
                    .col(
                        timestamp(SupportTickets::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_null(SupportTickets::ResolvedAt))
                    .col(string_null(SupportTickets::AssignedTo))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_support_ticket_customer_id")
                            .from(SupportTickets::Table, SupportTickets::CustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SupportTickets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SupportTickets {
    Table,
    TicketId,
    CustomerId,
    Issue,
    Priority,
    Status,
    CreatedAt,
    ResolvedAt,
    AssignedTo,
}
