use super::*;

/// Tests that any listed role passes the requirement.
///
/// Expected: Ok(user) for a Technician against a Technician/DeploymentLead
/// list
#[tokio::test]
async fn allows_listed_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;
    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::AnyRole(&[
            UserRole::Technician,
            UserRole::DeploymentLead,
        ])])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that admins bypass role-list requirements.
///
/// Expected: Ok(user) for an admin not named in the list
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
        .require(&[Permission::AnyRole(&[
            UserRole::Technician,
            UserRole::DeploymentLead,
        ])])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a role outside the list is denied.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn denies_unlisted_role() -> Result<(), AppError> {
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
        .require(&[Permission::AnyRole(&[
            UserRole::Technician,
            UserRole::DeploymentLead,
        ])])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied))
    ));

    Ok(())
}
