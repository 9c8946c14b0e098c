use super::*;

/// Tests seeding a checklist from a list of item labels.
///
/// Expected: Ok with incomplete items numbered from 1 in the given order
#[tokio::test]
async fn seeds_items_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::deployment_task::create_task(db).await?;

    let repo = ChecklistRepository::new(db);
    let result = repo
        .seed(task.task_id, &["First step", "Second step", "Third step"])
        .await;

    assert!(result.is_ok());

    let items = repo.find_by_task(task.task_id).await?;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].item, "First step");
    assert_eq!(items[1].item, "Second step");
    assert_eq!(items[2].item, "Third step");
    assert!(items.iter().all(|i| !i.completed));

    Ok(())
}

/// Tests that checklists are isolated per task.
///
/// Expected: Ok with each task seeing only its own items
#[tokio::test]
async fn scopes_items_to_task() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let task_a = factory::deployment_task::create_task(db).await?;
    let task_b = factory::deployment_task::create_task(db).await?;

    let repo = ChecklistRepository::new(db);
    repo.seed(task_a.task_id, &["A only"]).await?;
    repo.seed(task_b.task_id, &["B first", "B second"]).await?;

    assert_eq!(repo.find_by_task(task_a.task_id).await?.len(), 1);
    assert_eq!(repo.find_by_task(task_b.task_id).await?.len(), 2);

    Ok(())
}
