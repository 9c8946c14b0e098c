use super::*;

/// Tests attaching a customer to a splitter port.
///
/// Expected: Ok with splitter id and port stored on the customer
#[tokio::test]
async fn attaches_customer_to_port() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::create_customer(db).await?;

    let repo = CustomerRepository::new(db);
    let result = repo.set_splitter_port(customer.customer_id, 3, 4).await;

    assert!(result.is_ok());

    let stored = repo.find_by_id(customer.customer_id).await?.unwrap();
    assert_eq!(stored.splitter_id, Some(3));
    assert_eq!(stored.assigned_port, Some(4));

    Ok(())
}

/// Tests detaching a customer from their splitter port.
///
/// Expected: Ok with both attachment fields cleared
#[tokio::test]
async fn clear_detaches_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = factory::customer::CustomerFactory::new(db)
        .splitter_port(3, 4)
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    repo.clear_splitter_port(customer.customer_id).await?;

    let stored = repo.find_by_id(customer.customer_id).await?.unwrap();
    assert!(stored.splitter_id.is_none());
    assert!(stored.assigned_port.is_none());

    Ok(())
}
