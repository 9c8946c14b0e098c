use super::*;

/// Tests creating a new user account.
///
/// Verifies that the user repository successfully creates a new user record
/// with the specified username, credentials, and role.
///
/// Expected: Ok with user created and active status set to true
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo
        .create(CreateUserParams {
            username: "planner1".to_string(),
            password_hash: "deadbeef".to_string(),
            password_salt: "cafebabe".to_string(),
            role: UserRole::Planner,
        })
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.username, "planner1");
    assert_eq!(user.role, UserRole::Planner);
    assert!(user.active);

    let stored = repo.find_by_username("planner1").await?.unwrap();
    assert!(stored.last_login.is_none());

    Ok(())
}

/// Tests that duplicate usernames are rejected by the unique constraint.
///
/// Expected: Err on the second insert with the same username
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(CreateUserParams {
        username: "tech1".to_string(),
        password_hash: "deadbeef".to_string(),
        password_salt: "cafebabe".to_string(),
        role: UserRole::Technician,
    })
    .await?;

    let result = repo
        .create(CreateUserParams {
            username: "tech1".to_string(),
            password_hash: "deadbeef".to_string(),
            password_salt: "cafebabe".to_string(),
            role: UserRole::Technician,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
