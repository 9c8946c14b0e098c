//! Network topology reporting service.
//!
//! Assembles the headend → FDH → splitter → customer tree for the topology
//! view. The deployment covers a single headend; the report takes the first
//! one, matching how the network is provisioned.

use entity::enums::CustomerStatus;
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::network::{
        CustomerInTopologyDto, FdhDto, HeadendDto, NetworkMetricsDto, NetworkTopologyDto,
        SplitterDto,
    },
    server::{
        data::{
            customer::CustomerRepository, fdh::FdhRepository, headend::HeadendRepository,
            splitter::SplitterRepository,
        },
        error::AppError,
    },
};

pub struct NetworkService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NetworkService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the full topology tree plus summary metrics.
    pub async fn topology(&self) -> Result<NetworkTopologyDto, AppError> {
        let headend_repo = HeadendRepository::new(self.db);
        let fdh_repo = FdhRepository::new(self.db);
        let splitter_repo = SplitterRepository::new(self.db);
        let customer_repo = CustomerRepository::new(self.db);

        let headend = headend_repo
            .get_all()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("No headend configured".to_string()))?;

        let fdhs = fdh_repo.find_by_headend(headend.headend_id).await?;

        let mut fdh_dtos = Vec::with_capacity(fdhs.len());
        for fdh in fdhs {
            let splitters = splitter_repo.find_by_fdh(fdh.fdh_id).await?;

            let mut splitter_dtos = Vec::with_capacity(splitters.len());
            for splitter in splitters {
                let customers = customer_repo
                    .find_by_splitter(splitter.splitter_id)
                    .await?
                    .into_iter()
                    .map(|c| CustomerInTopologyDto {
                        customer_id: c.customer_id,
                        name: c.name,
                        plan: c.plan,
                        assigned_port: c.assigned_port,
                        status: c.status.to_value(),
                    })
                    .collect();

                splitter_dtos.push(SplitterDto {
                    splitter_id: splitter.splitter_id,
                    model: splitter.model,
                    port_capacity: splitter.port_capacity,
                    used_ports: splitter.used_ports,
                    location: splitter.location,
                    customers,
                });
            }

            fdh_dtos.push(FdhDto {
                fdh_id: fdh.fdh_id,
                name: fdh.name,
                location: fdh.location,
                region: fdh.region,
                max_ports: fdh.max_ports,
                splitters: splitter_dtos,
            });
        }

        let (total_ports, used_ports) = splitter_repo.port_totals().await?;

        let metrics = NetworkMetricsDto {
            total_splitters: splitter_repo.count().await?,
            total_ports,
            used_ports,
            active_customers: customer_repo
                .count_by_status(CustomerStatus::Active)
                .await?,
        };

        Ok(NetworkTopologyDto {
            headend: HeadendDto {
                headend_id: headend.headend_id,
                name: headend.name,
                location: headend.location,
                region: headend.region,
            },
            fdhs: fdh_dtos,
            metrics,
        })
    }
}
