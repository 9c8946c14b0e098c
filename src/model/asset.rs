use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full inventory record for an asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssetDto {
    pub asset_id: i32,
    pub asset_type: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: String,
    pub location: Option<String>,
    pub assigned_to_customer_id: Option<i32>,
    pub assigned_date: Option<DateTime<Utc>>,
}

/// Payload for creating or updating an asset.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssetRequestDto {
    pub asset_type: String,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: String,
    pub location: Option<String>,
}

/// Per-status counts for one asset type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AssetTypeStatsDto {
    pub available: u64,
    pub assigned: u64,
    pub faulty: u64,
    pub retired: u64,
}

/// Inventory stat cards, one block per tracked asset type.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct AssetStatsDto {
    pub ont: AssetTypeStatsDto,
    pub router: AssetTypeStatsDto,
    pub splitter: AssetTypeStatsDto,
    pub fdh: AssetTypeStatsDto,
    pub fiber_roll: AssetTypeStatsDto,
}

/// Available asset offered for allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailableAssetDto {
    pub asset_id: i32,
    pub serial_number: Option<String>,
    pub model: Option<String>,
    pub location: Option<String>,
}

/// Asset already allocated to a customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AllocatedAssetDto {
    pub asset_id: i32,
    pub asset_type: String,
    pub serial_number: Option<String>,
    pub model: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AllocateAssetDto {
    pub customer_id: i32,
    pub asset_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeallocateAssetDto {
    pub customer_id: i32,
    pub asset_id: i32,
}
