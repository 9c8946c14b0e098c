use crate::server::{error::AppError, service::network::NetworkService};
use entity::enums::CustomerStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests assembling the topology tree.
///
/// Builds a headend with one FDH, two splitters, and an attached customer,
/// then verifies the tree and the summary metrics.
///
/// Expected: Ok with the full hierarchy and correct port totals
#[tokio::test]
async fn builds_hierarchy_with_metrics() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_network_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let headend = factory::headend::create_headend(db).await?;
    let fdh = factory::fdh::create_fdh(db, headend.headend_id).await?;
    let splitter_a = factory::splitter::SplitterFactory::new(db)
        .fdh_id(fdh.fdh_id)
        .port_capacity(8)
        .used_ports(1)
        .build()
        .await?;
    let splitter_b = factory::splitter::SplitterFactory::new(db)
        .fdh_id(fdh.fdh_id)
        .port_capacity(16)
        .build()
        .await?;
    let customer = factory::customer::CustomerFactory::new(db)
        .status(CustomerStatus::Active)
        .splitter_port(splitter_a.splitter_id, 1)
        .build()
        .await?;

    let service = NetworkService::new(db);
    let topology = service.topology().await.unwrap();

    assert_eq!(topology.headend.headend_id, headend.headend_id);
    assert_eq!(topology.fdhs.len(), 1);
    assert_eq!(topology.fdhs[0].splitters.len(), 2);

    let reported_a = topology.fdhs[0]
        .splitters
        .iter()
        .find(|s| s.splitter_id == splitter_a.splitter_id)
        .unwrap();
    assert_eq!(reported_a.customers.len(), 1);
    assert_eq!(reported_a.customers[0].customer_id, customer.customer_id);

    let reported_b = topology.fdhs[0]
        .splitters
        .iter()
        .find(|s| s.splitter_id == splitter_b.splitter_id)
        .unwrap();
    assert!(reported_b.customers.is_empty());

    assert_eq!(topology.metrics.total_splitters, 2);
    assert_eq!(topology.metrics.total_ports, 24);
    assert_eq!(topology.metrics.used_ports, 1);
    assert_eq!(topology.metrics.active_customers, 1);

    Ok(())
}

/// Tests the topology view with no headend provisioned.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn errors_without_headend() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_network_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = NetworkService::new(db);
    let result = service.topology().await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
