//! Deployment lead dashboard service.

use entity::enums::{AssetStatus, CustomerStatus};
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{DeploymentLeadDashboardDto, DeploymentLeadStatsDto},
    server::{
        data::{asset::AssetRepository, customer::CustomerRepository},
        error::AppError,
        service::asset::AssetService,
    },
};

pub struct DeploymentLeadService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeploymentLeadService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the deployment lead landing page: allocation stats and every
    /// customer with their allocated assets.
    pub async fn dashboard(&self) -> Result<DeploymentLeadDashboardDto, AppError> {
        let asset_repo = AssetRepository::new(self.db);
        let customer_repo = CustomerRepository::new(self.db);

        let stats = DeploymentLeadStatsDto {
            total_customers: customer_repo.count().await?,
            assets_allocated: asset_repo.count_by_status(AssetStatus::Assigned).await?,
            available_assets: asset_repo.count_by_status(AssetStatus::Available).await?,
            // Customers still pending are waiting on their install kit.
            pending_allocations: customer_repo
                .count_by_status(CustomerStatus::Pending)
                .await?,
        };

        Ok(DeploymentLeadDashboardDto {
            stats,
            customers: AssetService::new(self.db).customers_with_assets().await?,
        })
    }
}
