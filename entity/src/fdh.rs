use sea_orm::entity::prelude::*;

/// Fiber Distribution Hub; houses splitters downstream of a headend.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fdhs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub fdh_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub region: Option<String>,
    pub max_ports: Option<i32>,
    pub headend_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
