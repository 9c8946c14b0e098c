//! Asset factory for creating test inventory assets.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::enums::{AssetStatus, AssetType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test assets with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::asset::AssetFactory;
///
/// let asset = AssetFactory::new(&db)
///     .asset_type(AssetType::Router)
///     .serial_number("SN-1234")
///     .assigned_to(customer.customer_id)
///     .build()
///     .await?;
/// ```
pub struct AssetFactory<'a> {
    db: &'a DatabaseConnection,
    asset_type: AssetType,
    model: Option<String>,
    serial_number: Option<String>,
    status: AssetStatus,
    location: Option<String>,
    assigned_to_customer_id: Option<i32>,
}

impl<'a> AssetFactory<'a> {
    /// Creates a new AssetFactory with default values.
    ///
    /// Defaults:
    /// - asset_type: `AssetType::Ont`
    /// - model: `"Model {id}"` where id is auto-incremented
    /// - serial_number: `"SN-{id}"`
    /// - status: `AssetStatus::Available`
    /// - location, assignment: unset
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            asset_type: AssetType::Ont,
            model: Some(format!("Model {}", id)),
            serial_number: Some(format!("SN-{}", id)),
            status: AssetStatus::Available,
            location: None,
            assigned_to_customer_id: None,
        }
    }

    /// Sets the asset type.
    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        self.asset_type = asset_type;
        self
    }

    /// Sets the serial number.
    pub fn serial_number(mut self, serial_number: impl Into<String>) -> Self {
        self.serial_number = Some(serial_number.into());
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: AssetStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the warehouse location.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Marks the asset as assigned to the given customer.
    ///
    /// Also sets the status to `Assigned` and stamps the assignment date.
    pub fn assigned_to(mut self, customer_id: i32) -> Self {
        self.status = AssetStatus::Assigned;
        self.assigned_to_customer_id = Some(customer_id);
        self
    }

    /// Builds and inserts the asset entity into the database.
    pub async fn build(self) -> Result<entity::asset::Model, DbErr> {
        let assigned_date = self.assigned_to_customer_id.map(|_| Utc::now());
        entity::asset::ActiveModel {
            asset_type: ActiveValue::Set(self.asset_type),
            model: ActiveValue::Set(self.model),
            serial_number: ActiveValue::Set(self.serial_number),
            status: ActiveValue::Set(self.status),
            location: ActiveValue::Set(self.location),
            assigned_to_customer_id: ActiveValue::Set(self.assigned_to_customer_id),
            assigned_date: ActiveValue::Set(assigned_date),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an asset with default values.
///
/// Shorthand for `AssetFactory::new(db).build().await`.
pub async fn create_asset(db: &DatabaseConnection) -> Result<entity::asset::Model, DbErr> {
    AssetFactory::new(db).build().await
}

/// Creates an asset of a specific type.
pub async fn create_asset_of_type(
    db: &DatabaseConnection,
    asset_type: AssetType,
) -> Result<entity::asset::Model, DbErr> {
    AssetFactory::new(db).asset_type(asset_type).build().await
}
