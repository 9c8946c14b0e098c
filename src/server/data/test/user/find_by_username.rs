use super::*;
use test_utils::factory;

/// Tests looking up a user by username.
///
/// Expected: Ok(Some(user)) matching the created account
#[tokio::test]
async fn returns_matching_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("support1")
        .role(UserRole::SupportAgent)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let result = repo.find_by_username("support1").await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.user_id, created.user_id);
    assert_eq!(user.role, UserRole::SupportAgent);

    Ok(())
}

/// Tests looking up a username that doesn't exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let result = repo.find_by_username("ghost").await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
