//! Role dashboard response shapes. Each role gets a stats block plus the
//! listings its landing page renders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    audit::{AuditLogDto, UserLogDto},
    customer::{CustomerDto, CustomerWithAssetsDto},
    task::TaskDto,
};

// --- Admin ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminStatsDto {
    pub total_assets: u64,
    pub total_users: u64,
    pub scheduled_tasks: u64,
    pub active_customers: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminDashboardDto {
    pub stats: AdminStatsDto,
    pub recent_activities: Vec<AuditLogDto>,
    pub user_logs: Vec<UserLogDto>,
}

// --- Planner ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PlannerMetricsDto {
    pub total_fdhs: u64,
    pub total_splitters: u64,
    pub total_ports: i64,
    pub used_ports: i64,
    pub active_connections: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionalDataDto {
    pub region: String,
    pub connections: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FdhCapacityDto {
    pub fdh_id: i32,
    pub name: String,
    pub region: Option<String>,
    pub splitter_count: usize,
    pub total_capacity: i64,
    pub used_ports: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecentActivityDto {
    pub action_type: String,
    pub description: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlannerDashboardDto {
    pub metrics: PlannerMetricsDto,
    pub regional_data: Vec<RegionalDataDto>,
    pub fdh_capacity: Vec<FdhCapacityDto>,
    pub recent_activities: Vec<RecentActivityDto>,
}

// --- Technician ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TechnicianStatsDto {
    pub pending_installations: usize,
    pub tasks_due_today: usize,
    pub upcoming_appointments: usize,
    pub completed_this_week: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TechnicianDashboardDto {
    pub stats: TechnicianStatsDto,
    pub tasks: Vec<TaskDto>,
}

// --- Support ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SupportMetricsDto {
    pub open_tickets: u64,
    pub resolved_today: u64,
    pub total_customers: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SupportTicketDto {
    pub ticket_id: i32,
    pub customer_name: String,
    pub issue: String,
    pub priority: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SupportDashboardDto {
    pub metrics: SupportMetricsDto,
    pub customers: Vec<CustomerDto>,
    pub recent_tickets: Vec<SupportTicketDto>,
}

// --- Field engineer ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldEngineerStatsDto {
    pub created_today: u64,
    pub created_this_week: u64,
    pub pending_activation: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FieldEngineerDashboardDto {
    pub stats: FieldEngineerStatsDto,
    pub recent_customers: Vec<CustomerDto>,
}

// --- Deployment lead ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeploymentLeadStatsDto {
    pub total_customers: u64,
    pub assets_allocated: u64,
    pub available_assets: u64,
    pub pending_allocations: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeploymentLeadDashboardDto {
    pub stats: DeploymentLeadStatsDto,
    pub customers: Vec<CustomerWithAssetsDto>,
}
