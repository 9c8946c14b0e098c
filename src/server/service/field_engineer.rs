//! Field engineer dashboard service.

use chrono::{Duration, Utc};
use entity::enums::CustomerStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{FieldEngineerDashboardDto, FieldEngineerStatsDto},
    server::{data::customer::CustomerRepository, error::AppError, model::customer::Customer},
};

const RECENT_CUSTOMERS: usize = 20;

pub struct FieldEngineerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FieldEngineerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the field engineer landing page: intake stats and the most
    /// recently created customers.
    pub async fn dashboard(&self) -> Result<FieldEngineerDashboardDto, AppError> {
        let customers = CustomerRepository::new(self.db).get_all().await?;

        let today = Utc::now().date_naive();
        let week_ago = today - Duration::days(7);

        let stats = FieldEngineerStatsDto {
            created_today: customers
                .iter()
                .filter(|c| c.created_at.date_naive() == today)
                .count() as u64,
            created_this_week: customers
                .iter()
                .filter(|c| c.created_at.date_naive() >= week_ago)
                .count() as u64,
            pending_activation: customers
                .iter()
                .filter(|c| c.status == CustomerStatus::Pending)
                .count() as u64,
        };

        Ok(FieldEngineerDashboardDto {
            stats,
            recent_customers: customers
                .into_iter()
                .take(RECENT_CUSTOMERS)
                .map(Customer::into_dto)
                .collect(),
        })
    }
}
