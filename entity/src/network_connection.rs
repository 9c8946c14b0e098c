use sea_orm::entity::prelude::*;

use crate::enums::ConnectionStatus;

/// Deployment-zone detail captured during customer onboarding, one row per
/// customer.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "network_connections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub customer_id: i32,
    pub deployment_zone: Option<String>,
    pub fdh_location: Option<String>,
    pub splitter_port: Option<String>,
    pub ont_serial: Option<String>,
    pub router_serial: Option<String>,
    pub cable_length: Option<String>,
    pub status: ConnectionStatus,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
