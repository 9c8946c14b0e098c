use super::*;

/// Tests that the named role passes its own requirement.
///
/// Expected: Ok(user)
#[tokio::test]
async fn allows_matching_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::SupportAgent)
        .build()
        .await?;
    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Role(UserRole::SupportAgent)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that admins bypass single-role requirements.
///
/// Expected: Ok(user) for an admin against a SupportAgent requirement
#[tokio::test]
async fn allows_admin_bypass() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::Admin)
        .build()
        .await?;
    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Role(UserRole::SupportAgent)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that an unrelated role is denied.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_other_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::FieldEngineer)
        .build()
        .await?;
    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Role(UserRole::SupportAgent)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));

    Ok(())
}
