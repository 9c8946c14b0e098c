//! Asset inventory service.
//!
//! Owns the asset lifecycle: CRUD on inventory, the per-type stat rollups,
//! and the allocation/deallocation flows. Allocation and deallocation run
//! inside a transaction so the asset's status flip and the allocation row
//! never diverge.

use entity::enums::{AssetStatus, AssetType};
use sea_orm::{ActiveEnum, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        asset::{AllocateAssetDto, AssetStatsDto, AssetTypeStatsDto, DeallocateAssetDto},
        customer::CustomerWithAssetsDto,
    },
    server::{
        data::{
            asset::AssetRepository, assigned_asset::AssignedAssetRepository,
            customer::CustomerRepository,
        },
        error::AppError,
        model::asset::{Asset, CreateAssetParams, UpdateAssetParams},
        service::audit::AuditService,
    },
};

pub struct AssetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AssetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the whole inventory, newest first.
    pub async fn get_all(&self) -> Result<Vec<Asset>, AppError> {
        Ok(AssetRepository::new(self.db).get_all().await?)
    }

    /// Finds a single asset.
    pub async fn get_by_id(&self, asset_id: i32) -> Result<Asset, AppError> {
        AssetRepository::new(self.db)
            .find_by_id(asset_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Asset not found".to_string()))
    }

    /// Creates an inventory asset. Serial numbers must be unique across the
    /// inventory.
    pub async fn create(
        &self,
        params: CreateAssetParams,
        acting_user_id: i32,
    ) -> Result<Asset, AppError> {
        let repo = AssetRepository::new(self.db);

        if let Some(serial) = params.serial_number.as_deref() {
            if repo.find_by_serial(serial).await?.is_some() {
                return Err(AppError::BadRequest(format!(
                    "An asset with serial number '{}' already exists",
                    serial
                )));
            }
        }

        let asset = repo.create(params).await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "ASSET_CREATED",
                &format!(
                    "Created {} asset #{}",
                    asset.asset_type.to_value(),
                    asset.asset_id
                ),
            )
            .await;

        Ok(asset)
    }

    /// Updates an asset's descriptive fields.
    pub async fn update(
        &self,
        asset_id: i32,
        params: UpdateAssetParams,
        acting_user_id: i32,
    ) -> Result<Asset, AppError> {
        let repo = AssetRepository::new(self.db);

        if repo.find_by_id(asset_id).await?.is_none() {
            return Err(AppError::NotFound("Asset not found".to_string()));
        }

        let asset = repo.update(asset_id, params).await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "ASSET_UPDATED",
                &format!("Updated asset #{}", asset_id),
            )
            .await;

        Ok(asset)
    }

    /// Deletes an asset. Assets currently assigned to a customer cannot be
    /// deleted; they must be deallocated first.
    pub async fn delete(&self, asset_id: i32, acting_user_id: i32) -> Result<(), AppError> {
        let repo = AssetRepository::new(self.db);

        let Some(asset) = repo.find_by_id(asset_id).await? else {
            return Err(AppError::NotFound("Asset not found".to_string()));
        };

        if asset.status == AssetStatus::Assigned {
            return Err(AppError::BadRequest(
                "Cannot delete an asset that is assigned to a customer".to_string(),
            ));
        }

        repo.delete(asset_id).await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "ASSET_DELETED",
                &format!("Deleted asset #{}", asset_id),
            )
            .await;

        Ok(())
    }

    /// Builds the per-type inventory stat cards.
    pub async fn stats(&self) -> Result<AssetStatsDto, AppError> {
        Ok(AssetStatsDto {
            ont: self.type_stats(AssetType::Ont).await?,
            router: self.type_stats(AssetType::Router).await?,
            splitter: self.type_stats(AssetType::Splitter).await?,
            fdh: self.type_stats(AssetType::Fdh).await?,
            fiber_roll: self.type_stats(AssetType::FiberRoll).await?,
        })
    }

    async fn type_stats(&self, asset_type: AssetType) -> Result<AssetTypeStatsDto, AppError> {
        let repo = AssetRepository::new(self.db);

        Ok(AssetTypeStatsDto {
            available: repo
                .count_by_type_and_status(asset_type, AssetStatus::Available)
                .await?,
            assigned: repo
                .count_by_type_and_status(asset_type, AssetStatus::Assigned)
                .await?,
            faulty: repo
                .count_by_type_and_status(asset_type, AssetStatus::Faulty)
                .await?,
            retired: repo
                .count_by_type_and_status(asset_type, AssetStatus::Retired)
                .await?,
        })
    }

    /// Lists available assets of one type for the allocation picker.
    pub async fn available_by_type(&self, asset_type: AssetType) -> Result<Vec<Asset>, AppError> {
        Ok(AssetRepository::new(self.db)
            .find_available_by_type(asset_type)
            .await?)
    }

    /// Allocates an available asset to a customer.
    ///
    /// Runs in a transaction: flips the asset to Assigned and records the
    /// allocation row. Only assets in the Available status can be allocated.
    pub async fn allocate(
        &self,
        dto: AllocateAssetDto,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let asset_repo = AssetRepository::new(&txn);
        let customer_repo = CustomerRepository::new(&txn);

        let Some(asset) = asset_repo.find_by_id(dto.asset_id).await? else {
            return Err(AppError::NotFound("Asset not found".to_string()));
        };

        if asset.status != AssetStatus::Available {
            return Err(AppError::BadRequest(format!(
                "Asset #{} is not available for allocation",
                dto.asset_id
            )));
        }

        if customer_repo.find_by_id(dto.customer_id).await?.is_none() {
            return Err(AppError::NotFound("Customer not found".to_string()));
        }

        asset_repo
            .mark_assigned(dto.asset_id, dto.customer_id)
            .await?;
        AssignedAssetRepository::new(&txn)
            .create(dto.customer_id, dto.asset_id)
            .await?;

        txn.commit().await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "ASSET_ALLOCATED",
                &format!(
                    "Allocated asset #{} to customer #{}",
                    dto.asset_id, dto.customer_id
                ),
            )
            .await;

        Ok(())
    }

    /// Returns an asset allocated to a customer back to the available pool.
    ///
    /// Rejects the request unless the asset is currently assigned to that
    /// exact customer.
    pub async fn deallocate(
        &self,
        dto: DeallocateAssetDto,
        acting_user_id: i32,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let asset_repo = AssetRepository::new(&txn);

        let Some(asset) = asset_repo.find_by_id(dto.asset_id).await? else {
            return Err(AppError::NotFound("Asset not found".to_string()));
        };

        if asset.status != AssetStatus::Assigned
            || asset.assigned_to_customer_id != Some(dto.customer_id)
        {
            return Err(AppError::BadRequest(format!(
                "Asset #{} is not assigned to customer #{}",
                dto.asset_id, dto.customer_id
            )));
        }

        asset_repo.mark_available(dto.asset_id).await?;
        AssignedAssetRepository::new(&txn)
            .delete_by_asset(dto.asset_id)
            .await?;

        txn.commit().await?;

        AuditService::new(self.db)
            .log(
                Some(acting_user_id),
                "ASSET_DEALLOCATED",
                &format!(
                    "Deallocated asset #{} from customer #{}",
                    dto.asset_id, dto.customer_id
                ),
            )
            .await;

        Ok(())
    }

    /// Lists every customer together with the assets allocated to them.
    pub async fn customers_with_assets(&self) -> Result<Vec<CustomerWithAssetsDto>, AppError> {
        let customers = CustomerRepository::new(self.db).get_all().await?;
        let assets = AssetRepository::new(self.db).get_all().await?;

        Ok(customers
            .into_iter()
            .map(|customer| {
                let allocated_assets = assets
                    .iter()
                    .filter(|a| {
                        a.status == AssetStatus::Assigned
                            && a.assigned_to_customer_id == Some(customer.customer_id)
                    })
                    .cloned()
                    .map(Asset::into_allocated_dto)
                    .collect();

                CustomerWithAssetsDto {
                    customer_id: customer.customer_id,
                    name: customer.name,
                    neighborhood: customer.neighborhood,
                    plan: customer.plan,
                    status: customer.status.to_value(),
                    allocated_assets,
                }
            })
            .collect())
    }
}
