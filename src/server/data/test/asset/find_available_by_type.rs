use super::*;

/// Tests filtering the available pool by asset type.
///
/// Creates a mix of types and statuses and verifies that only available
/// assets of the requested type come back.
///
/// Expected: Ok with exactly the available ONTs
#[tokio::test]
async fn returns_only_available_of_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Asset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let available_ont = factory::asset::create_asset_of_type(db, AssetType::Ont).await?;
    factory::asset::create_asset_of_type(db, AssetType::Router).await?;
    factory::asset::AssetFactory::new(db)
        .asset_type(AssetType::Ont)
        .status(AssetStatus::Faulty)
        .build()
        .await?;

    let repo = AssetRepository::new(db);
    let result = repo.find_available_by_type(AssetType::Ont).await;

    assert!(result.is_ok());
    let assets = result.unwrap();
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].asset_id, available_ont.asset_id);

    Ok(())
}

/// Tests filtering when no assets of the type exist.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_for_missing_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Asset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::asset::create_asset_of_type(db, AssetType::Router).await?;

    let repo = AssetRepository::new(db);
    let result = repo.find_available_by_type(AssetType::FiberRoll).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());

    Ok(())
}
