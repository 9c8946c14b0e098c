use crate::server::{
    error::{auth::AuthError, AppError},
    service::auth::AuthService,
    util::password,
};
use entity::enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn auth_tables() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::User)
        .with_table(entity::prelude::UserLog)
        .with_table(entity::prelude::AuditLog)
}

/// Tests logging in with valid credentials.
///
/// Expected: Ok with the user returned, last-login stamped and a session
/// log entry recorded
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), DbErr> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let salt = password::generate_salt();
    let hash = password::hash_password("hunter2", &salt);
    factory::user::UserFactory::new(db)
        .username("admin")
        .password(hash, salt)
        .role(UserRole::Admin)
        .build()
        .await?;

    let service = AuthService::new(db);
    let result = service
        .login("admin", "hunter2", Some("10.0.0.1".to_string()))
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "admin");
    assert_eq!(user.role, UserRole::Admin);

    let stored = crate::server::data::user::UserRepository::new(db)
        .find_by_username("admin")
        .await?
        .unwrap();
    assert!(stored.last_login.is_some());

    let logins = crate::server::data::audit::UserLogRepository::new(db)
        .recent_logins(10)
        .await?;
    assert_eq!(logins.len(), 1);
    assert_eq!(logins[0].ip_address.as_deref(), Some("10.0.0.1"));

    Ok(())
}

/// Tests logging in with the wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let salt = password::generate_salt();
    let hash = password::hash_password("hunter2", &salt);
    factory::user::UserFactory::new(db)
        .username("admin")
        .password(hash, salt)
        .build()
        .await?;

    let service = AuthService::new(db);
    let result = service.login("admin", "wrong", None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with an unknown username.
///
/// Expected: Err(InvalidCredentials), indistinguishable from a bad password
#[tokio::test]
async fn rejects_unknown_username() -> Result<(), DbErr> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let result = service.login("ghost", "hunter2", None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in to a disabled account with correct credentials.
///
/// Expected: Err(AccountDisabled)
#[tokio::test]
async fn rejects_disabled_account() -> Result<(), DbErr> {
    let test = auth_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let salt = password::generate_salt();
    let hash = password::hash_password("hunter2", &salt);
    factory::user::UserFactory::new(db)
        .username("former")
        .password(hash, salt)
        .active(false)
        .build()
        .await?;

    let service = AuthService::new(db);
    let result = service.login("former", "hunter2", None).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccountDisabled))
    ));

    Ok(())
}
