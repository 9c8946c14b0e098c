use super::*;
use test_utils::factory;

/// Tests disabling a user account.
///
/// Expected: Ok with the stored active flag flipped to false
#[tokio::test]
async fn disables_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let result = repo.set_active(user.user_id, false).await;

    assert!(result.is_ok());

    let stored = repo.find_by_id(user.user_id).await?.unwrap();
    assert!(!stored.active);

    Ok(())
}

/// Tests re-enabling a disabled user account.
///
/// Expected: Ok with the stored active flag flipped back to true
#[tokio::test]
async fn reenables_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = test_utils::factory::user::UserFactory::new(db)
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.set_active(user.user_id, true).await?;

    let stored = repo.find_by_id(user.user_id).await?.unwrap();
    assert!(stored.active);

    Ok(())
}
