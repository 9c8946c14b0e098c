use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer leaf in the topology tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerInTopologyDto {
    pub customer_id: i32,
    pub name: String,
    pub plan: Option<String>,
    pub assigned_port: Option<i32>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SplitterDto {
    pub splitter_id: i32,
    pub model: Option<String>,
    pub port_capacity: i32,
    pub used_ports: i32,
    pub location: Option<String>,
    pub customers: Vec<CustomerInTopologyDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FdhDto {
    pub fdh_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub region: Option<String>,
    pub max_ports: Option<i32>,
    pub splitters: Vec<SplitterDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HeadendDto {
    pub headend_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub region: Option<String>,
}

/// Aggregate port usage across the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NetworkMetricsDto {
    pub total_splitters: u64,
    pub total_ports: i64,
    pub used_ports: i64,
    pub active_customers: u64,
}

/// Headend → FDH → splitter → customer hierarchy plus summary metrics.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NetworkTopologyDto {
    pub headend: HeadendDto,
    pub fdhs: Vec<FdhDto>,
    pub metrics: NetworkMetricsDto,
}
