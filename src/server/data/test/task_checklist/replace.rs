use super::*;

/// Tests replacing a checklist wholesale.
///
/// Expected: Ok with old items gone and new items renumbered from 1
#[tokio::test]
async fn replaces_existing_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::deployment_task::create_task(db).await?;

    let repo = ChecklistRepository::new(db);
    repo.seed(task.task_id, &["Old first", "Old second"]).await?;

    let result = repo
        .replace(
            task.task_id,
            vec![
                ChecklistItemParams {
                    item: "New first".to_string(),
                    completed: true,
                },
                ChecklistItemParams {
                    item: "New second".to_string(),
                    completed: false,
                },
                ChecklistItemParams {
                    item: "New third".to_string(),
                    completed: false,
                },
            ],
        )
        .await;

    assert!(result.is_ok());

    let items = repo.find_by_task(task.task_id).await?;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].item, "New first");
    assert!(items[0].completed);
    assert_eq!(items[2].item, "New third");

    Ok(())
}

/// Tests replacing a checklist with an empty list.
///
/// Expected: Ok with the checklist cleared
#[tokio::test]
async fn empty_replacement_clears_checklist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::deployment_task::create_task(db).await?;

    let repo = ChecklistRepository::new(db);
    repo.seed(task.task_id, &["Only item"]).await?;
    repo.replace(task.task_id, Vec::new()).await?;

    assert!(repo.find_by_task(task.task_id).await?.is_empty());

    Ok(())
}
