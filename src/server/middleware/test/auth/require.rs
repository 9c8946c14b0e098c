use super::*;

mod require_admin;
mod require_any_role;
mod require_role;

/// Tests that an empty requirement list only checks authentication.
///
/// Endpoints open to any signed-in user call `require(&[])`; the guard
/// still has to resolve and return the session user.
///
/// Expected: Ok(user) for any active authenticated account
#[tokio::test]
async fn empty_requirements_accept_any_authenticated_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().user_id, user.user_id);

    Ok(())
}

/// Tests that every listed requirement must hold.
///
/// Expected: Err(AccessDenied) when the user satisfies the role check but
/// not the admin check
#[tokio::test]
async fn fails_if_any_requirement_missing() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Planner)
        .build()
        .await?;
    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Role(UserRole::Planner), Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));

    Ok(())
}

/// Tests rejection when no user id is stored in the session.
///
/// Expected: Err(UserNotInSession)
#[tokio::test]
async fn rejects_missing_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests rejection when the session points at a deleted account.
///
/// Expected: Err(UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    session.insert(SESSION_AUTH_USER_ID, 9999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase))
    ));

    Ok(())
}

/// Tests rejection of disabled accounts before any role check runs.
///
/// Expected: Err(AccountDisabled) even for an admin
#[tokio::test]
async fn rejects_disabled_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .active(false)
        .build()
        .await?;
    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled))
    ));

    Ok(())
}
