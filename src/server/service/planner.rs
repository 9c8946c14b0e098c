//! Planner dashboard service.

use std::collections::HashMap;

use entity::enums::CustomerStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::dashboard::{
        FdhCapacityDto, PlannerDashboardDto, PlannerMetricsDto, RecentActivityDto, RegionalDataDto,
    },
    server::{
        data::{
            audit::AuditLogRepository, customer::CustomerRepository, fdh::FdhRepository,
            splitter::SplitterRepository,
        },
        error::AppError,
    },
};

const TOP_NEIGHBORHOODS: usize = 5;
const RECENT_LIMIT: u64 = 10;

/// Audit action types surfaced on the planner's activity feed.
const NETWORK_ACTIONS: &[&str] = &[
    "CUSTOMER_ONBOARDED",
    "SPLITTER_PORT_ASSIGNED",
    "SPLITTER_PORT_RELEASED",
    "ASSET_ALLOCATED",
    "ASSET_DEALLOCATED",
];

pub struct PlannerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlannerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the planner landing page: port metrics, neighborhood rollup,
    /// per-FDH capacity and recent network activity.
    pub async fn dashboard(&self) -> Result<PlannerDashboardDto, AppError> {
        let fdh_repo = FdhRepository::new(self.db);
        let splitter_repo = SplitterRepository::new(self.db);
        let customer_repo = CustomerRepository::new(self.db);

        let (total_ports, used_ports) = splitter_repo.port_totals().await?;

        let metrics = PlannerMetricsDto {
            total_fdhs: fdh_repo.count().await?,
            total_splitters: splitter_repo.count().await?,
            total_ports,
            used_ports,
            active_connections: customer_repo
                .count_by_status(CustomerStatus::Active)
                .await?,
        };

        let regional_data = self.top_neighborhoods().await?;
        let fdh_capacity = self.fdh_capacity().await?;
        let recent_activities = self.recent_network_activity().await?;

        Ok(PlannerDashboardDto {
            metrics,
            regional_data,
            fdh_capacity,
            recent_activities,
        })
    }

    /// Rolls customers up by neighborhood and keeps the five busiest.
    async fn top_neighborhoods(&self) -> Result<Vec<RegionalDataDto>, AppError> {
        let customers = CustomerRepository::new(self.db).get_all().await?;

        let mut counts: HashMap<String, u64> = HashMap::new();
        for customer in customers {
            let region = customer
                .neighborhood
                .unwrap_or_else(|| "Unassigned".to_string());
            *counts.entry(region).or_insert(0) += 1;
        }

        let mut regions: Vec<RegionalDataDto> = counts
            .into_iter()
            .map(|(region, connections)| RegionalDataDto {
                region,
                connections,
            })
            .collect();

        regions.sort_by(|a, b| b.connections.cmp(&a.connections).then(a.region.cmp(&b.region)));
        regions.truncate(TOP_NEIGHBORHOODS);

        Ok(regions)
    }

    /// Per-FDH capacity utilisation from its housed splitters.
    async fn fdh_capacity(&self) -> Result<Vec<FdhCapacityDto>, AppError> {
        let fdh_repo = FdhRepository::new(self.db);
        let splitter_repo = SplitterRepository::new(self.db);

        let mut capacity = Vec::new();
        for fdh in fdh_repo.get_all().await? {
            let splitters = splitter_repo.find_by_fdh(fdh.fdh_id).await?;

            capacity.push(FdhCapacityDto {
                fdh_id: fdh.fdh_id,
                name: fdh.name,
                region: fdh.region,
                splitter_count: splitters.len(),
                total_capacity: splitters.iter().map(|s| s.port_capacity as i64).sum(),
                used_ports: splitters.iter().map(|s| s.used_ports as i64).sum(),
            });
        }

        Ok(capacity)
    }

    async fn recent_network_activity(&self) -> Result<Vec<RecentActivityDto>, AppError> {
        // Over-fetch, then keep only network-related actions.
        let entries = AuditLogRepository::new(self.db)
            .find_filtered(None, None, RECENT_LIMIT * 5)
            .await?;

        Ok(entries
            .into_iter()
            .filter(|e| NETWORK_ACTIONS.contains(&e.action_type.as_str()))
            .take(RECENT_LIMIT as usize)
            .map(|e| RecentActivityDto {
                action_type: e.action_type,
                description: e.description,
                timestamp: e.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            })
            .collect())
    }
}
