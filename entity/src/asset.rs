use sea_orm::entity::prelude::*;

use crate::enums::{AssetStatus, AssetType};

/// Inventory asset (ONT, router, splitter hardware, cable roll, ...).
/// `assigned_to_customer_id` and `assigned_date` are populated while the
/// asset's status is `Assigned`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub asset_id: i32,
    pub asset_type: AssetType,
    pub model: Option<String>,
    #[sea_orm(unique)]
    pub serial_number: Option<String>,
    pub status: AssetStatus,
    pub location: Option<String>,
    pub assigned_to_customer_id: Option<i32>,
    pub assigned_date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
