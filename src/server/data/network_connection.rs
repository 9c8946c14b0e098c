//! Network connection data repository.
//!
//! One row per customer, capturing the deployment-zone details submitted on
//! the onboarding form.

use entity::enums::ConnectionStatus;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Parameters for recording a customer's network connection.
pub struct CreateConnectionParams {
    pub customer_id: i32,
    pub deployment_zone: Option<String>,
    pub fdh_location: Option<String>,
    pub splitter_port: Option<String>,
    pub ont_serial: Option<String>,
    pub router_serial: Option<String>,
    pub cable_length: Option<String>,
    pub status: ConnectionStatus,
}

/// Repository for customer network connection records.
pub struct NetworkConnectionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NetworkConnectionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateConnectionParams,
    ) -> Result<entity::network_connection::Model, DbErr> {
        entity::prelude::NetworkConnection::insert(entity::network_connection::ActiveModel {
            customer_id: ActiveValue::Set(params.customer_id),
            deployment_zone: ActiveValue::Set(params.deployment_zone),
            fdh_location: ActiveValue::Set(params.fdh_location),
            splitter_port: ActiveValue::Set(params.splitter_port),
            ont_serial: ActiveValue::Set(params.ont_serial),
            router_serial: ActiveValue::Set(params.router_serial),
            cable_length: ActiveValue::Set(params.cable_length),
            status: ActiveValue::Set(params.status),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_customer(
        &self,
        customer_id: i32,
    ) -> Result<Option<entity::network_connection::Model>, DbErr> {
        entity::prelude::NetworkConnection::find()
            .filter(entity::network_connection::Column::CustomerId.eq(customer_id))
            .one(self.db)
            .await
    }
}
