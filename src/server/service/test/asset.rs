use crate::model::asset::{AllocateAssetDto, DeallocateAssetDto};
use crate::server::{data::asset::AssetRepository, error::AppError, service::asset::AssetService};
use entity::enums::AssetStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests allocating an available asset to a customer.
///
/// Expected: Ok with the asset flipped to Assigned and an allocation row
/// recorded
#[tokio::test]
async fn allocates_available_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_allocation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let asset = factory::asset::create_asset(db).await?;

    let service = AssetService::new(db);
    let result = service
        .allocate(
            AllocateAssetDto {
                customer_id: customer.customer_id,
                asset_id: asset.asset_id,
            },
            1,
        )
        .await;

    assert!(result.is_ok());

    let stored = AssetRepository::new(db)
        .find_by_id(asset.asset_id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AssetStatus::Assigned);
    assert_eq!(stored.assigned_to_customer_id, Some(customer.customer_id));

    let allocated = AssetRepository::new(db)
        .find_by_customer(customer.customer_id)
        .await?;
    assert_eq!(allocated.len(), 1);

    Ok(())
}

/// Tests allocating an asset that isn't in the available pool.
///
/// Expected: Err(BadRequest) and the existing assignment untouched
#[tokio::test]
async fn rejects_allocation_of_unavailable_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_allocation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original_owner = factory::customer::create_customer(db).await?;
    let other = factory::customer::create_customer(db).await?;
    let asset = factory::asset::AssetFactory::new(db)
        .assigned_to(original_owner.customer_id)
        .build()
        .await?;

    let service = AssetService::new(db);
    let result = service
        .allocate(
            AllocateAssetDto {
                customer_id: other.customer_id,
                asset_id: asset.asset_id,
            },
            1,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = AssetRepository::new(db)
        .find_by_id(asset.asset_id)
        .await?
        .unwrap();
    assert_eq!(
        stored.assigned_to_customer_id,
        Some(original_owner.customer_id)
    );

    Ok(())
}

/// Tests allocating a nonexistent asset.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_allocation_of_missing_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_allocation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;

    let service = AssetService::new(db);
    let result = service
        .allocate(
            AllocateAssetDto {
                customer_id: customer.customer_id,
                asset_id: 999,
            },
            1,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests returning an allocated asset to the pool.
///
/// Expected: Ok with the asset Available again and the allocation row gone
#[tokio::test]
async fn deallocates_assigned_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_allocation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let asset = factory::asset::create_asset(db).await?;

    let service = AssetService::new(db);
    service
        .allocate(
            AllocateAssetDto {
                customer_id: customer.customer_id,
                asset_id: asset.asset_id,
            },
            1,
        )
        .await
        .unwrap();

    let result = service
        .deallocate(
            DeallocateAssetDto {
                customer_id: customer.customer_id,
                asset_id: asset.asset_id,
            },
            1,
        )
        .await;

    assert!(result.is_ok());

    let stored = AssetRepository::new(db)
        .find_by_id(asset.asset_id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AssetStatus::Available);
    assert!(stored.assigned_to_customer_id.is_none());

    assert!(AssetRepository::new(db)
        .find_by_customer(customer.customer_id)
        .await?
        .is_empty());

    Ok(())
}

/// Tests deallocating an asset that belongs to a different customer.
///
/// Expected: Err(BadRequest) and the assignment untouched
#[tokio::test]
async fn rejects_deallocation_by_wrong_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_allocation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::customer::create_customer(db).await?;
    let other = factory::customer::create_customer(db).await?;
    let asset = factory::asset::AssetFactory::new(db)
        .assigned_to(owner.customer_id)
        .build()
        .await?;

    let service = AssetService::new(db);
    let result = service
        .deallocate(
            DeallocateAssetDto {
                customer_id: other.customer_id,
                asset_id: asset.asset_id,
            },
            1,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = AssetRepository::new(db)
        .find_by_id(asset.asset_id)
        .await?
        .unwrap();
    assert_eq!(stored.status, AssetStatus::Assigned);

    Ok(())
}

/// Tests deleting an asset that is assigned to a customer.
///
/// Expected: Err(BadRequest) and the asset still present
#[tokio::test]
async fn rejects_deleting_assigned_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_allocation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;
    let asset = factory::asset::AssetFactory::new(db)
        .assigned_to(customer.customer_id)
        .build()
        .await?;

    let service = AssetService::new(db);
    let result = service.delete(asset.asset_id, 1).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(AssetRepository::new(db)
        .find_by_id(asset.asset_id)
        .await?
        .is_some());

    Ok(())
}
