use super::*;

/// Tests filtering audit entries by action type.
///
/// Expected: Ok with only entries of the requested type
#[tokio::test]
async fn filters_by_action_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditLogRepository::new(db);
    repo.create(Some(1), "LOGIN".to_string(), None).await?;
    repo.create(Some(1), "ASSET_CREATED".to_string(), None)
        .await?;
    repo.create(Some(2), "LOGIN".to_string(), None).await?;

    let result = repo.find_filtered(Some("LOGIN"), None, 100).await;

    assert!(result.is_ok());
    let entries = result.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.action_type == "LOGIN"));

    Ok(())
}

/// Tests combining the user filter with the result cap.
///
/// Expected: Ok with at most `limit` entries for the requested user
#[tokio::test]
async fn filters_by_user_and_caps_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditLogRepository::new(db);
    for _ in 0..5 {
        repo.create(Some(1), "TASK_STATUS_UPDATED".to_string(), None)
            .await?;
    }
    repo.create(Some(2), "TASK_STATUS_UPDATED".to_string(), None)
        .await?;

    let result = repo.find_filtered(None, Some(1), 3).await;

    assert!(result.is_ok());
    let entries = result.unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.user_id == Some(1)));

    Ok(())
}

/// Tests listing the distinct action types for filter dropdowns.
///
/// Expected: Ok with unique action types in alphabetical order
#[tokio::test]
async fn distinct_action_types_are_sorted() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AuditLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AuditLogRepository::new(db);
    repo.create(None, "LOGOUT".to_string(), None).await?;
    repo.create(None, "LOGIN".to_string(), None).await?;
    repo.create(None, "LOGIN".to_string(), None).await?;

    let types = repo.distinct_action_types().await?;

    assert_eq!(types, vec!["LOGIN".to_string(), "LOGOUT".to_string()]);

    Ok(())
}
