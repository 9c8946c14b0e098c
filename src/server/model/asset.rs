//! Asset domain models and parameters.
//!
//! Assets are inventory items (ONTs, routers, splitter hardware, fiber rolls)
//! tracked through an Available → Assigned lifecycle. Allocation to a customer
//! flips the status and stamps the assignment columns; deallocation reverses it.

use chrono::{DateTime, Utc};
use entity::enums::{AssetStatus, AssetType};
use sea_orm::ActiveEnum;

use crate::model::asset::{AllocatedAssetDto, AssetDto, AvailableAssetDto};

/// Inventory asset domain model.
#[derive(Debug, Clone)]
pub struct Asset {
    pub asset_id: i32,
    pub asset_type: AssetType,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub location: Option<String>,
    pub assigned_to_customer_id: Option<i32>,
    pub assigned_date: Option<DateTime<Utc>>,
}

impl Asset {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::asset::Model) -> Self {
        Self {
            asset_id: entity.asset_id,
            asset_type: entity.asset_type,
            model: entity.model,
            serial_number: entity.serial_number,
            status: entity.status,
            location: entity.location,
            assigned_to_customer_id: entity.assigned_to_customer_id,
            assigned_date: entity.assigned_date,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> AssetDto {
        AssetDto {
            asset_id: self.asset_id,
            asset_type: self.asset_type.to_value(),
            model: self.model,
            serial_number: self.serial_number,
            status: self.status.to_value(),
            location: self.location,
            assigned_to_customer_id: self.assigned_to_customer_id,
            assigned_date: self.assigned_date,
        }
    }

    /// Projects the asset into the slim shape used by allocation pickers.
    pub fn into_available_dto(self) -> AvailableAssetDto {
        AvailableAssetDto {
            asset_id: self.asset_id,
            serial_number: self.serial_number,
            model: self.model,
            location: self.location,
        }
    }

    /// Projects the asset into the shape listed under a customer.
    pub fn into_allocated_dto(self) -> AllocatedAssetDto {
        AllocatedAssetDto {
            asset_id: self.asset_id,
            asset_type: self.asset_type.to_value(),
            serial_number: self.serial_number,
            model: self.model,
        }
    }
}

/// Parameters for creating an asset.
pub struct CreateAssetParams {
    pub asset_type: AssetType,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub location: Option<String>,
}

/// Parameters for updating an asset. All descriptive fields are replaced;
/// assignment columns are managed by allocation and never touched here.
pub struct UpdateAssetParams {
    pub asset_type: AssetType,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub location: Option<String>,
}
