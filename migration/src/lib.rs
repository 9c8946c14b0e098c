pub use sea_orm_migration::prelude::*;

mod m20260810_000001_create_users_table;
mod m20260810_000002_create_headends_table;
mod m20260810_000003_create_fdhs_table;
mod m20260810_000004_create_splitters_table;
mod m20260810_000005_create_customers_table;
mod m20260810_000006_create_assets_table;
mod m20260810_000007_create_assigned_assets_table;
mod m20260810_000008_create_technicians_table;
mod m20260811_000009_create_deployment_tasks_table;
mod m20260811_000010_create_task_checklists_table;
mod m20260811_000011_create_task_notes_table;
mod m20260812_000012_create_fiber_drop_lines_table;
mod m20260812_000013_create_network_connections_table;
mod m20260812_000014_create_support_tickets_table;
mod m20260813_000015_create_audit_logs_table;
mod m20260813_000016_create_user_logs_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260810_000001_create_users_table::Migration),
            Box::new(m20260810_000002_create_headends_table::Migration),
            Box::new(m20260810_000003_create_fdhs_table::Migration),
            Box::new(m20260810_000004_create_splitters_table::Migration),
            Box::new(m20260810_000005_create_customers_table::Migration),
            Box::new(m20260810_000006_create_assets_table::Migration),
            Box::new(m20260810_000007_create_assigned_assets_table::Migration),
            Box::new(m20260810_000008_create_technicians_table::Migration),
            Box::new(m20260811_000009_create_deployment_tasks_table::Migration),
            Box::new(m20260811_000010_create_task_checklists_table::Migration),
            Box::new(m20260811_000011_create_task_notes_table::Migration),
            Box::new(m20260812_000012_create_fiber_drop_lines_table::Migration),
            Box::new(m20260812_000013_create_network_connections_table::Migration),
            Box::new(m20260812_000014_create_support_tickets_table::Migration),
            Box::new(m20260813_000015_create_audit_logs_table::Migration),
            Box::new(m20260813_000016_create_user_logs_table::Migration),
        ]
    }
}
