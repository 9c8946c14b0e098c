//! Asset data repository for inventory operations.

use chrono::Utc;
use entity::enums::{AssetStatus, AssetType};
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::asset::{Asset, CreateAssetParams, UpdateAssetParams};

/// Repository providing database operations for inventory assets.
pub struct AssetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AssetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new asset into inventory.
    pub async fn create(&self, params: CreateAssetParams) -> Result<Asset, DbErr> {
        let entity = entity::prelude::Asset::insert(entity::asset::ActiveModel {
            asset_type: ActiveValue::Set(params.asset_type),
            model: ActiveValue::Set(params.model),
            serial_number: ActiveValue::Set(params.serial_number),
            status: ActiveValue::Set(params.status),
            location: ActiveValue::Set(params.location),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Asset::from_entity(entity))
    }

    pub async fn find_by_id(&self, asset_id: i32) -> Result<Option<Asset>, DbErr> {
        let entity = entity::prelude::Asset::find_by_id(asset_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Asset::from_entity))
    }

    /// Finds an asset by its serial number.
    pub async fn find_by_serial(&self, serial_number: &str) -> Result<Option<Asset>, DbErr> {
        let entity = entity::prelude::Asset::find()
            .filter(entity::asset::Column::SerialNumber.eq(serial_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Asset::from_entity))
    }

    /// Lists all assets, newest first.
    pub async fn get_all(&self) -> Result<Vec<Asset>, DbErr> {
        let entities = entity::prelude::Asset::find()
            .order_by_desc(entity::asset::Column::AssetId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Asset::from_entity).collect())
    }

    /// Lists available assets of one type, for allocation pickers.
    pub async fn find_available_by_type(&self, asset_type: AssetType) -> Result<Vec<Asset>, DbErr> {
        let entities = entity::prelude::Asset::find()
            .filter(entity::asset::Column::AssetType.eq(asset_type))
            .filter(entity::asset::Column::Status.eq(AssetStatus::Available))
            .order_by_asc(entity::asset::Column::AssetId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Asset::from_entity).collect())
    }

    /// Lists assets currently assigned to a customer.
    pub async fn find_by_customer(&self, customer_id: i32) -> Result<Vec<Asset>, DbErr> {
        let entities = entity::prelude::Asset::find()
            .filter(entity::asset::Column::AssignedToCustomerId.eq(customer_id))
            .filter(entity::asset::Column::Status.eq(AssetStatus::Assigned))
            .order_by_asc(entity::asset::Column::AssetId)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Asset::from_entity).collect())
    }

    /// Counts assets of one type in one status. Feeds the inventory stat
    /// cards.
    pub async fn count_by_type_and_status(
        &self,
        asset_type: AssetType,
        status: AssetStatus,
    ) -> Result<u64, DbErr> {
        entity::prelude::Asset::find()
            .filter(entity::asset::Column::AssetType.eq(asset_type))
            .filter(entity::asset::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Counts all assets in one status.
    pub async fn count_by_status(&self, status: AssetStatus) -> Result<u64, DbErr> {
        entity::prelude::Asset::find()
            .filter(entity::asset::Column::Status.eq(status))
            .count(self.db)
            .await
    }

    /// Counts the whole inventory.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Asset::find().count(self.db).await
    }

    /// Replaces an asset's descriptive fields.
    ///
    /// Assignment columns are left untouched; they belong to the allocation
    /// flow.
    pub async fn update(&self, asset_id: i32, params: UpdateAssetParams) -> Result<Asset, DbErr> {
        let entity = entity::prelude::Asset::update(entity::asset::ActiveModel {
            asset_id: ActiveValue::Unchanged(asset_id),
            asset_type: ActiveValue::Set(params.asset_type),
            model: ActiveValue::Set(params.model),
            serial_number: ActiveValue::Set(params.serial_number),
            status: ActiveValue::Set(params.status),
            location: ActiveValue::Set(params.location),
            ..Default::default()
        })
        .exec(self.db)
        .await?;

        Ok(Asset::from_entity(entity))
    }

    /// Marks an asset as assigned to a customer, stamping the assignment
    /// date with the current UTC time.
    pub async fn mark_assigned(&self, asset_id: i32, customer_id: i32) -> Result<(), DbErr> {
        entity::prelude::Asset::update_many()
            .filter(entity::asset::Column::AssetId.eq(asset_id))
            .col_expr(
                entity::asset::Column::Status,
                sea_orm::sea_query::Expr::value(AssetStatus::Assigned),
            )
            .col_expr(
                entity::asset::Column::AssignedToCustomerId,
                sea_orm::sea_query::Expr::value(Some(customer_id)),
            )
            .col_expr(
                entity::asset::Column::AssignedDate,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Returns an asset to the available pool, clearing assignment columns.
    pub async fn mark_available(&self, asset_id: i32) -> Result<(), DbErr> {
        entity::prelude::Asset::update_many()
            .filter(entity::asset::Column::AssetId.eq(asset_id))
            .col_expr(
                entity::asset::Column::Status,
                sea_orm::sea_query::Expr::value(AssetStatus::Available),
            )
            .col_expr(
                entity::asset::Column::AssignedToCustomerId,
                sea_orm::sea_query::Expr::value(None::<i32>),
            )
            .col_expr(
                entity::asset::Column::AssignedDate,
                sea_orm::sea_query::Expr::value(None::<chrono::DateTime<Utc>>),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes an asset. Callers must reject deletion of assigned assets
    /// before reaching this method.
    pub async fn delete(&self, asset_id: i32) -> Result<(), DbErr> {
        entity::prelude::Asset::delete_by_id(asset_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
