use super::*;

/// Tests looking up an asset by serial number.
///
/// Expected: Ok(Some(asset)) matching the created record
#[tokio::test]
async fn returns_matching_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Asset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::asset::AssetFactory::new(db)
        .serial_number("SN-4242")
        .build()
        .await?;

    let repo = AssetRepository::new(db);
    let result = repo.find_by_serial("SN-4242").await;

    assert!(result.is_ok());
    let asset = result.unwrap();
    assert!(asset.is_some());
    assert_eq!(asset.unwrap().asset_id, created.asset_id);

    Ok(())
}

/// Tests looking up a serial number that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_serial() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Asset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AssetRepository::new(db);
    let result = repo.find_by_serial("SN-MISSING").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
