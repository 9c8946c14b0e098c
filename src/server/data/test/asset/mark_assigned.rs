use super::*;

/// Tests flipping an asset to Assigned.
///
/// Expected: Ok with the customer id and assignment date stamped
#[tokio::test]
async fn assigns_asset_to_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Asset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::asset::create_asset(db).await?;

    let repo = AssetRepository::new(db);
    let result = repo.mark_assigned(asset.asset_id, 7).await;

    assert!(result.is_ok());

    let stored = repo.find_by_id(asset.asset_id).await?.unwrap();
    assert_eq!(stored.status, AssetStatus::Assigned);
    assert_eq!(stored.assigned_to_customer_id, Some(7));
    assert!(stored.assigned_date.is_some());

    Ok(())
}

/// Tests returning an assigned asset to the available pool.
///
/// Expected: Ok with the assignment fields cleared
#[tokio::test]
async fn mark_available_clears_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Asset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let asset = factory::asset::AssetFactory::new(db).assigned_to(7).build().await?;

    let repo = AssetRepository::new(db);
    repo.mark_available(asset.asset_id).await?;

    let stored = repo.find_by_id(asset.asset_id).await?.unwrap();
    assert_eq!(stored.status, AssetStatus::Available);
    assert!(stored.assigned_to_customer_id.is_none());
    assert!(stored.assigned_date.is_none());

    Ok(())
}
