use sea_orm::entity::prelude::*;

use crate::enums::LineStatus;

/// Physical drop line from a splitter port to a customer premises.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "fiber_drop_lines")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub line_id: i32,
    pub from_splitter_id: Option<i32>,
    pub to_customer_id: Option<i32>,
    pub length_meters: Option<f64>,
    pub status: LineStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
