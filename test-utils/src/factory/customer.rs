//! Customer factory for creating test customers.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::enums::{ConnectionType, CustomerStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test customers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::customer::CustomerFactory;
///
/// let customer = CustomerFactory::new(&db)
///     .neighborhood("Oakwood")
///     .status(CustomerStatus::Active)
///     .splitter_port(splitter.splitter_id, 3)
///     .build()
///     .await?;
/// ```
pub struct CustomerFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    address: Option<String>,
    neighborhood: Option<String>,
    plan: Option<String>,
    connection_type: Option<ConnectionType>,
    status: CustomerStatus,
    splitter_id: Option<i32>,
    assigned_port: Option<i32>,
}

impl<'a> CustomerFactory<'a> {
    /// Creates a new CustomerFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Customer {id}"` where id is auto-incremented
    /// - address: `"{id} Test Street"`
    /// - status: `CustomerStatus::Pending`
    /// - connection type, neighborhood, plan, splitter attachment: unset
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Customer {}", id),
            address: Some(format!("{} Test Street", id)),
            neighborhood: None,
            plan: None,
            connection_type: None,
            status: CustomerStatus::Pending,
            splitter_id: None,
            assigned_port: None,
        }
    }

    /// Sets the customer name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the neighborhood.
    pub fn neighborhood(mut self, neighborhood: impl Into<String>) -> Self {
        self.neighborhood = Some(neighborhood.into());
        self
    }

    /// Sets the service plan.
    pub fn plan(mut self, plan: impl Into<String>) -> Self {
        self.plan = Some(plan.into());
        self
    }

    /// Sets the connection type.
    pub fn connection_type(mut self, connection_type: ConnectionType) -> Self {
        self.connection_type = Some(connection_type);
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: CustomerStatus) -> Self {
        self.status = status;
        self
    }

    /// Attaches the customer to a splitter port.
    pub fn splitter_port(mut self, splitter_id: i32, port: i32) -> Self {
        self.splitter_id = Some(splitter_id);
        self.assigned_port = Some(port);
        self
    }

    /// Builds and inserts the customer entity into the database.
    pub async fn build(self) -> Result<entity::customer::Model, DbErr> {
        entity::customer::ActiveModel {
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(self.address),
            neighborhood: ActiveValue::Set(self.neighborhood),
            plan: ActiveValue::Set(self.plan),
            connection_type: ActiveValue::Set(self.connection_type),
            status: ActiveValue::Set(self.status),
            splitter_id: ActiveValue::Set(self.splitter_id),
            assigned_port: ActiveValue::Set(self.assigned_port),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer with default values.
///
/// Shorthand for `CustomerFactory::new(db).build().await`.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::customer::Model, DbErr> {
    CustomerFactory::new(db).build().await
}
