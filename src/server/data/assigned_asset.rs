//! Allocation history repository.
//!
//! One row per active customer↔asset allocation. Deallocation deletes the
//! row; the asset's own assignment columns are the authoritative state and
//! this table exists for per-customer listings and allocation lookups.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Repository for customer↔asset allocation rows.
pub struct AssignedAssetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssignedAssetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records an allocation, stamped with the current UTC time.
    pub async fn create(
        &self,
        customer_id: i32,
        asset_id: i32,
    ) -> Result<entity::assigned_asset::Model, DbErr> {
        entity::prelude::AssignedAsset::insert(entity::assigned_asset::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            asset_id: ActiveValue::Set(asset_id),
            assigned_on: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Removes the allocation row for an asset.
    pub async fn delete_by_asset(&self, asset_id: i32) -> Result<(), DbErr> {
        entity::prelude::AssignedAsset::delete_many()
            .filter(entity::assigned_asset::Column::AssetId.eq(asset_id))
            .exec(self.db)
            .await?;
        Ok(())
    }
}
