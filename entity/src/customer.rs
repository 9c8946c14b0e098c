use sea_orm::entity::prelude::*;

use crate::enums::{ConnectionType, CustomerStatus};

/// Fiber service subscriber. `splitter_id`/`assigned_port` are set once the
/// customer is attached to a splitter port.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub customer_id: i32,
    pub name: String,
    pub address: Option<String>,
    pub neighborhood: Option<String>,
    pub plan: Option<String>,
    pub connection_type: Option<ConnectionType>,
    pub status: CustomerStatus,
    pub splitter_id: Option<i32>,
    pub assigned_port: Option<i32>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
