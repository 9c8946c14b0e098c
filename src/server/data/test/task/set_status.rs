use super::*;
use sea_orm::EntityTrait;

/// Tests moving a task to Completed.
///
/// Expected: Ok with the completion timestamp stamped
#[tokio::test]
async fn completed_stamps_completed_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::deployment_task::create_task(db).await?;

    let repo = TaskRepository::new(db);
    let result = repo.set_status(task.task_id, TaskStatus::Completed).await;

    assert!(result.is_ok());

    let stored = entity::prelude::DeploymentTask::find_by_id(task.task_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TaskStatus::Completed);
    assert!(stored.completed_at.is_some());

    Ok(())
}

/// Tests moving a completed task back to InProgress.
///
/// Expected: Ok with the completion timestamp cleared
#[tokio::test]
async fn reopening_clears_completed_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let task = factory::deployment_task::DeploymentTaskFactory::new(db)
        .status(TaskStatus::Completed)
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    repo.set_status(task.task_id, TaskStatus::InProgress).await?;

    let stored = entity::prelude::DeploymentTask::find_by_id(task.task_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, TaskStatus::InProgress);
    assert!(stored.completed_at.is_none());

    Ok(())
}
