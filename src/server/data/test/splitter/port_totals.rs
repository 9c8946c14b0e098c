use super::*;

/// Tests summing port capacity and usage across all splitters.
///
/// Expected: Ok((total capacity, total used)) across every row
#[tokio::test]
async fn sums_capacity_and_usage() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_network_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_headend, fdh, _splitter) = factory::helpers::create_splitter_with_dependencies(db).await?;
    factory::splitter::SplitterFactory::new(db)
        .fdh_id(fdh.fdh_id)
        .port_capacity(8)
        .used_ports(5)
        .build()
        .await?;

    let repo = SplitterRepository::new(db);
    let result = repo.port_totals().await;

    assert!(result.is_ok());
    let (total, used) = result.unwrap();
    // Default factory splitter is 16 ports with 0 used.
    assert_eq!(total, 24);
    assert_eq!(used, 5);

    Ok(())
}

/// Tests the totals with no splitters in the database.
///
/// Expected: Ok((0, 0))
#[tokio::test]
async fn returns_zero_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_network_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SplitterRepository::new(db);
    let result = repo.port_totals().await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), (0, 0));

    Ok(())
}
