use sea_orm::entity::prelude::*;

/// Root of the network hierarchy; feeds every FDH in its region.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "headends")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub headend_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub region: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
