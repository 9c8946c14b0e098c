use crate::model::customer::{AssignSplitterPortDto, CustomerOnboardingDto};
use crate::server::{
    data::{
        customer::CustomerRepository, fiber_drop_line::FiberDropLineRepository,
        network_connection::NetworkConnectionRepository, splitter::SplitterRepository,
        task::TaskRepository, task_checklist::ChecklistRepository,
    },
    error::AppError,
    service::customer::{CustomerService, INSTALLATION_CHECKLIST},
};
use entity::enums::{ConnectionStatus, CustomerStatus, LineStatus, TaskStatus};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

fn onboarding_dto() -> CustomerOnboardingDto {
    CustomerOnboardingDto {
        name: "Jordan Reyes".to_string(),
        address: "12 Birch Lane".to_string(),
        neighborhood: Some("Oakwood".to_string()),
        plan: "Fiber 300".to_string(),
        connection_type: "Wired".to_string(),
        deployment_zone: Some("Zone 4".to_string()),
        fdh_location: Some("FDH-OAK-02".to_string()),
        splitter_port: None,
        ont_serial: Some("ONT-991".to_string()),
        router_serial: None,
        cable_length: Some("80m".to_string()),
        installation_date: "2026-09-15".to_string(),
        technician_id: None,
        notes: Some("Gate code 4410".to_string()),
    }
}

/// Tests the full onboarding flow.
///
/// Expected: Ok with a Pending customer, a Pending connection record, a
/// Scheduled installation task seeded with the default checklist, and a
/// zero-padded customer reference
#[tokio::test]
async fn onboarding_creates_customer_task_and_checklist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let technician = factory::technician::create_technician(db).await?;
    let mut dto = onboarding_dto();
    dto.technician_id = Some(technician.technician_id);

    let service = CustomerService::new(db);
    let result = service.onboard(dto, 1).await;

    assert!(result.is_ok());
    let response = result.unwrap();
    assert_eq!(
        response.customer_ref,
        format!("CUST-{:06}", response.customer_id)
    );

    let customer = CustomerRepository::new(db)
        .find_by_id(response.customer_id)
        .await?
        .unwrap();
    assert_eq!(customer.status, CustomerStatus::Pending);

    let connection = NetworkConnectionRepository::new(db)
        .find_by_customer(response.customer_id)
        .await?
        .unwrap();
    assert_eq!(connection.status, ConnectionStatus::Pending);
    assert_eq!(connection.deployment_zone.as_deref(), Some("Zone 4"));

    let task = TaskRepository::new(db)
        .find_by_id(response.task_id)
        .await?
        .unwrap();
    assert_eq!(task.task_type, "Installation");
    assert_eq!(task.status, TaskStatus::Scheduled);
    assert_eq!(task.technician_id, Some(technician.technician_id));

    let checklist = ChecklistRepository::new(db)
        .find_by_task(response.task_id)
        .await?;
    assert_eq!(checklist.len(), INSTALLATION_CHECKLIST.len());
    assert_eq!(checklist[0].item, INSTALLATION_CHECKLIST[0]);

    Ok(())
}

/// Tests onboarding with a malformed installation date.
///
/// Expected: Err(BadRequest) and nothing persisted
#[tokio::test]
async fn onboarding_rejects_bad_date() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut dto = onboarding_dto();
    dto.installation_date = "15/09/2026".to_string();

    let service = CustomerService::new(db);
    let result = service.onboard(dto, 1).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(CustomerRepository::new(db).count().await?, 0);

    Ok(())
}

/// Tests onboarding with a technician that doesn't exist.
///
/// Expected: Err(NotFound) and no customer row left behind
#[tokio::test]
async fn onboarding_rejects_unknown_technician() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_onboarding_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut dto = onboarding_dto();
    dto.technician_id = Some(999);

    let service = CustomerService::new(db);
    let result = service.onboard(dto, 1).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(CustomerRepository::new(db).count().await?, 0);

    Ok(())
}

fn splitter_tables() -> TestBuilder {
    TestBuilder::new()
        .with_network_tables()
        .with_table(entity::prelude::AuditLog)
}

/// Tests attaching a customer without naming a port.
///
/// Expected: Ok with the lowest free port picked and usage incremented
#[tokio::test]
async fn assign_defaults_to_next_free_port() -> Result<(), DbErr> {
    let test = splitter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_headend, _fdh, splitter) =
        factory::helpers::create_splitter_with_dependencies(db).await?;
    // Port 1 is taken, so the next free port is 2.
    factory::customer::CustomerFactory::new(db)
        .splitter_port(splitter.splitter_id, 1)
        .build()
        .await?;
    let customer = factory::customer::create_customer(db).await?;

    let service = CustomerService::new(db);
    let result = service
        .assign_splitter_port(
            customer.customer_id,
            AssignSplitterPortDto {
                splitter_id: splitter.splitter_id,
                port: None,
            },
            1,
        )
        .await;

    assert!(result.is_ok());

    let stored = CustomerRepository::new(db)
        .find_by_id(customer.customer_id)
        .await?
        .unwrap();
    assert_eq!(stored.splitter_id, Some(splitter.splitter_id));
    assert_eq!(stored.assigned_port, Some(2));

    let stored_splitter = SplitterRepository::new(db)
        .find_by_id(splitter.splitter_id)
        .await?
        .unwrap();
    assert_eq!(stored_splitter.used_ports, splitter.used_ports + 1);

    let lines = entity::prelude::FiberDropLine::find().all(db).await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].to_customer_id, Some(customer.customer_id));
    assert_eq!(lines[0].status, LineStatus::Active);

    Ok(())
}

/// Tests attaching to a splitter with no free ports.
///
/// Expected: Err(BadRequest) and the customer left unattached
#[tokio::test]
async fn assign_rejects_full_splitter() -> Result<(), DbErr> {
    let test = splitter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let splitter = factory::splitter::SplitterFactory::new(db)
        .port_capacity(4)
        .used_ports(4)
        .build()
        .await?;
    let customer = factory::customer::create_customer(db).await?;

    let service = CustomerService::new(db);
    let result = service
        .assign_splitter_port(
            customer.customer_id,
            AssignSplitterPortDto {
                splitter_id: splitter.splitter_id,
                port: None,
            },
            1,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let stored = CustomerRepository::new(db)
        .find_by_id(customer.customer_id)
        .await?
        .unwrap();
    assert!(stored.splitter_id.is_none());

    Ok(())
}

/// Tests requesting a port that is already occupied.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn assign_rejects_taken_port() -> Result<(), DbErr> {
    let test = splitter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_headend, _fdh, splitter) =
        factory::helpers::create_splitter_with_dependencies(db).await?;
    factory::customer::CustomerFactory::new(db)
        .splitter_port(splitter.splitter_id, 3)
        .build()
        .await?;
    let customer = factory::customer::create_customer(db).await?;

    let service = CustomerService::new(db);
    let result = service
        .assign_splitter_port(
            customer.customer_id,
            AssignSplitterPortDto {
                splitter_id: splitter.splitter_id,
                port: Some(3),
            },
            1,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests attaching a customer who is already on a splitter.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn assign_rejects_already_attached_customer() -> Result<(), DbErr> {
    let test = splitter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_headend, _fdh, splitter) =
        factory::helpers::create_splitter_with_dependencies(db).await?;
    let customer = factory::customer::CustomerFactory::new(db)
        .splitter_port(splitter.splitter_id, 1)
        .build()
        .await?;

    let service = CustomerService::new(db);
    let result = service
        .assign_splitter_port(
            customer.customer_id,
            AssignSplitterPortDto {
                splitter_id: splitter.splitter_id,
                port: Some(2),
            },
            1,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests detaching an attached customer.
///
/// Expected: Ok with the port freed and usage decremented
#[tokio::test]
async fn release_frees_port() -> Result<(), DbErr> {
    let test = splitter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let splitter = factory::splitter::SplitterFactory::new(db)
        .used_ports(1)
        .build()
        .await?;
    let customer = factory::customer::CustomerFactory::new(db)
        .splitter_port(splitter.splitter_id, 1)
        .build()
        .await?;
    FiberDropLineRepository::new(db)
        .create(Some(splitter.splitter_id), Some(customer.customer_id), None)
        .await?;

    let service = CustomerService::new(db);
    let result = service
        .release_splitter_port(customer.customer_id, 1)
        .await;

    assert!(result.is_ok());

    let stored = CustomerRepository::new(db)
        .find_by_id(customer.customer_id)
        .await?
        .unwrap();
    assert!(stored.splitter_id.is_none());
    assert!(stored.assigned_port.is_none());

    let stored_splitter = SplitterRepository::new(db)
        .find_by_id(splitter.splitter_id)
        .await?
        .unwrap();
    assert_eq!(stored_splitter.used_ports, 0);

    let lines = entity::prelude::FiberDropLine::find().all(db).await?;
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].status, LineStatus::Disconnected);

    Ok(())
}

/// Tests detaching a customer who isn't attached anywhere.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn release_rejects_unattached_customer() -> Result<(), DbErr> {
    let test = splitter_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;

    let service = CustomerService::new(db);
    let result = service
        .release_splitter_port(customer.customer_id, 1)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
