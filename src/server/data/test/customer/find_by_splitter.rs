use super::*;

/// Tests listing the customers attached to one splitter.
///
/// Verifies that customers on other splitters and unattached customers are
/// excluded, and that results come back ordered by assigned port.
///
/// Expected: Ok with the attached customers in port order
#[tokio::test]
async fn returns_attached_customers_in_port_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let second = factory::customer::CustomerFactory::new(db)
        .splitter_port(1, 5)
        .build()
        .await?;
    let first = factory::customer::CustomerFactory::new(db)
        .splitter_port(1, 2)
        .build()
        .await?;
    factory::customer::CustomerFactory::new(db)
        .splitter_port(2, 1)
        .build()
        .await?;
    factory::customer::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    let result = repo.find_by_splitter(1).await;

    assert!(result.is_ok());
    let customers = result.unwrap();
    assert_eq!(customers.len(), 2);
    assert_eq!(customers[0].customer_id, first.customer_id);
    assert_eq!(customers[1].customer_id, second.customer_id);

    Ok(())
}
