use super::*;

/// Tests creating a new customer.
///
/// Expected: Ok with the customer stored and unattached to any splitter
#[tokio::test]
async fn creates_new_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let result = repo
        .create(CreateCustomerParams {
            name: "Jordan Reyes".to_string(),
            address: Some("12 Birch Lane".to_string()),
            neighborhood: Some("Oakwood".to_string()),
            plan: Some("Fiber 300".to_string()),
            connection_type: None,
            status: CustomerStatus::Pending,
        })
        .await;

    assert!(result.is_ok());
    let customer = result.unwrap();
    assert_eq!(customer.name, "Jordan Reyes");
    assert_eq!(customer.status, CustomerStatus::Pending);
    assert!(customer.splitter_id.is_none());
    assert!(customer.assigned_port.is_none());

    Ok(())
}
