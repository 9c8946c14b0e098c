//! Customer domain models and parameters.

use chrono::{DateTime, Utc};
use entity::enums::{ConnectionType, CustomerStatus};
use sea_orm::ActiveEnum;

use crate::model::customer::CustomerDto;

/// Fiber service subscriber.
#[derive(Debug, Clone)]
pub struct Customer {
    pub customer_id: i32,
    pub name: String,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub plan: Option<String>,
    pub connection_type: Option<ConnectionType>,
    pub status: CustomerStatus,
    pub splitter_id: Option<i32>,
    pub assigned_port: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::customer::Model) -> Self {
        Self {
            customer_id: entity.customer_id,
            name: entity.name,
            address: entity.address,
            neighborhood: entity.neighborhood,
            plan: entity.plan,
            connection_type: entity.connection_type,
            status: entity.status,
            splitter_id: entity.splitter_id,
            assigned_port: entity.assigned_port,
            created_at: entity.created_at,
        }
    }

    /// Converts the domain model to the summary DTO for list endpoints.
    pub fn into_dto(self) -> CustomerDto {
        CustomerDto {
            customer_id: self.customer_id,
            name: self.name,
            neighborhood: self.neighborhood,
            plan: self.plan,
            connection_type: self.connection_type.map(|c| c.to_value()),
            status: self.status.to_value(),
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a customer record.
pub struct CreateCustomerParams {
    pub name: String,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub plan: Option<String>,
    pub connection_type: Option<ConnectionType>,
    pub status: CustomerStatus,
}
