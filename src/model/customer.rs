use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::asset::AllocatedAssetDto;

/// Customer summary row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerDto {
    pub customer_id: i32,
    pub name: String,
    pub neighborhood: Option<String>,
    pub plan: Option<String>,
    pub connection_type: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for the field-engineer customer creation form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerDto {
    pub name: String,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub plan: Option<String>,
    pub connection_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCustomerResponseDto {
    pub customer_id: i32,
    pub name: String,
    pub status: String,
    pub message: String,
}

/// Multi-step onboarding form: customer details, deployment zone, device
/// serials and the installation appointment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerOnboardingDto {
    pub name: String,
    pub address: String,
    pub neighborhood: Option<String>,
    pub plan: String,
    pub connection_type: String,
    pub deployment_zone: Option<String>,
    pub fdh_location: Option<String>,
    pub splitter_port: Option<String>,
    pub ont_serial: Option<String>,
    pub router_serial: Option<String>,
    pub cable_length: Option<String>,
    /// Installation date, `YYYY-MM-DD`.
    pub installation_date: String,
    pub technician_id: Option<i32>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerOnboardingResponseDto {
    pub customer_id: i32,
    /// Human-facing reference, `CUST-%06d`.
    pub customer_ref: String,
    pub name: String,
    pub status: String,
    pub task_id: i32,
    pub message: String,
}

/// Splitter summary embedded in the customer detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SplitterInfoDto {
    pub splitter_id: i32,
    pub model: Option<String>,
    pub location: Option<String>,
}

/// Full customer view for support agents.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerDetailDto {
    pub customer_id: i32,
    pub name: String,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub plan: Option<String>,
    pub connection_type: Option<String>,
    pub status: String,
    pub assigned_port: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub splitter: Option<SplitterInfoDto>,
    pub assigned_assets: Vec<AllocatedAssetDto>,
}

/// Customer with every asset currently allocated to them.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerWithAssetsDto {
    pub customer_id: i32,
    pub name: String,
    pub neighborhood: Option<String>,
    pub plan: Option<String>,
    pub status: String,
    pub allocated_assets: Vec<AllocatedAssetDto>,
}

/// Request to attach a customer to a splitter port.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignSplitterPortDto {
    pub splitter_id: i32,
    /// Port number on the splitter; defaults to the next free port.
    pub port: Option<i32>,
}
