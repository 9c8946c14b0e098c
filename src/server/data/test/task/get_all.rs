use super::*;

/// Tests listing tasks with customer and technician names resolved.
///
/// Expected: Ok with names pulled from the referenced rows
#[tokio::test]
async fn resolves_customer_and_technician_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, technician, task) = factory::helpers::create_task_with_dependencies(db).await?;

    let repo = TaskRepository::new(db);
    let result = repo.get_all().await;

    assert!(result.is_ok());
    let tasks = result.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].task_id, task.task_id);
    assert_eq!(tasks[0].customer_name, customer.name);
    assert_eq!(tasks[0].technician_name.as_deref(), Some(technician.name.as_str()));

    Ok(())
}

/// Tests listing a task whose customer row is gone.
///
/// Expected: Ok with the customer name falling back to "Unknown"
#[tokio::test]
async fn falls_back_for_missing_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::deployment_task::DeploymentTaskFactory::new(db)
        .customer_id(999)
        .build()
        .await?;

    let repo = TaskRepository::new(db);
    let tasks = repo.get_all().await?;

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].customer_name, "Unknown");
    assert!(tasks[0].technician_name.is_none());

    Ok(())
}
