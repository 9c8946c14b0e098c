use sea_orm::entity::prelude::*;

/// Passive optical splitter inside an FDH. `used_ports` tracks how many of
/// the `port_capacity` customer ports are occupied and never exceeds it.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "splitters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub splitter_id: i32,
    pub fdh_id: Option<i32>,
    pub model: Option<String>,
    pub port_capacity: i32,
    pub used_ports: i32,
    pub location: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
