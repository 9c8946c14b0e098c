use super::*;

/// Tests that an admin passes the admin requirement.
///
/// Expected: Ok(user)
#[tokio::test]
async fn allows_admin() -> Result<(), AppError> {
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
        .require(&[Permission::Admin])
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().user_id, user.user_id);

    Ok(())
}

/// Tests that every other role is denied the admin requirement.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_non_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role(UserRole::DeploymentLead)
        .build()
        .await?;
    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));

    Ok(())
}
