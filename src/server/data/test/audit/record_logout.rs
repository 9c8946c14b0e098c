use super::*;

/// Tests stamping the logout time on an open session.
///
/// Expected: Ok with logout_time set on the session row
#[tokio::test]
async fn stamps_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserLogRepository::new(db);
    repo.record_login(1, Some("10.0.0.1".to_string())).await?;

    let result = repo.record_logout(1).await;

    assert!(result.is_ok());

    let sessions = repo.recent_logins(10).await?;
    assert_eq!(sessions.len(), 1);
    assert!(sessions[0].logout_time.is_some());

    Ok(())
}

/// Tests logging out a user with no open session.
///
/// Expected: Ok (no-op)
#[tokio::test]
async fn succeeds_without_open_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserLog)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserLogRepository::new(db);
    let result = repo.record_logout(42).await;

    assert!(result.is_ok());

    Ok(())
}
