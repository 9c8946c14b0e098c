//! Admin dashboard service.

use entity::enums::{CustomerStatus, TaskStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{AdminDashboardDto, AdminStatsDto},
    server::{
        data::{
            asset::AssetRepository, customer::CustomerRepository, task::TaskRepository,
            user::UserRepository,
        },
        error::AppError,
        service::audit::AuditService,
    },
};

const RECENT_LIMIT: u64 = 10;

pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the admin landing page: totals, recent audit activity, recent
    /// logins.
    pub async fn dashboard(&self) -> Result<AdminDashboardDto, AppError> {
        let audit = AuditService::new(self.db);

        let stats = AdminStatsDto {
            total_assets: AssetRepository::new(self.db).count().await?,
            total_users: UserRepository::new(self.db).count().await?,
            scheduled_tasks: TaskRepository::new(self.db)
                .count_by_status(TaskStatus::Scheduled)
                .await?,
            active_customers: CustomerRepository::new(self.db)
                .count_by_status(CustomerStatus::Active)
                .await?,
        };

        Ok(AdminDashboardDto {
            stats,
            recent_activities: audit.list(None, None, RECENT_LIMIT).await?,
            user_logs: audit.recent_logins(RECENT_LIMIT).await?,
        })
    }
}
