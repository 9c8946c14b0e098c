use super::*;

/// Tests updating a splitter's occupied port count.
///
/// Expected: Ok with the stored used_ports updated
#[tokio::test]
async fn updates_used_ports() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_network_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_headend, _fdh, splitter) =
        factory::helpers::create_splitter_with_dependencies(db).await?;

    let repo = SplitterRepository::new(db);
    let result = repo.set_used_ports(splitter.splitter_id, 9).await;

    assert!(result.is_ok());

    let stored = repo.find_by_id(splitter.splitter_id).await?.unwrap();
    assert_eq!(stored.used_ports, 9);

    Ok(())
}
