use super::*;

/// Tests creating a new inventory asset.
///
/// Expected: Ok with the asset stored and unassigned
#[tokio::test]
async fn creates_new_asset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Asset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AssetRepository::new(db);
    let result = repo
        .create(CreateAssetParams {
            asset_type: AssetType::Ont,
            model: Some("Nokia G-010G".to_string()),
            serial_number: Some("SN-0001".to_string()),
            status: AssetStatus::Available,
            location: Some("Warehouse A".to_string()),
        })
        .await;

    assert!(result.is_ok());
    let asset = result.unwrap();
    assert_eq!(asset.asset_type, AssetType::Ont);
    assert_eq!(asset.serial_number.as_deref(), Some("SN-0001"));
    assert_eq!(asset.status, AssetStatus::Available);
    assert!(asset.assigned_to_customer_id.is_none());
    assert!(asset.assigned_date.is_none());

    Ok(())
}

/// Tests that the serial number unique constraint rejects duplicates.
///
/// Expected: Err on the second insert with the same serial
#[tokio::test]
async fn rejects_duplicate_serial() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Asset)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::asset::AssetFactory::new(db)
        .serial_number("SN-DUP")
        .build()
        .await?;

    let repo = AssetRepository::new(db);
    let result = repo
        .create(CreateAssetParams {
            asset_type: AssetType::Router,
            model: None,
            serial_number: Some("SN-DUP".to_string()),
            status: AssetStatus::Available,
            location: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
