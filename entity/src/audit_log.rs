use sea_orm::entity::prelude::*;

/// Audit trail entry for a mutating operation. `user_id` is nullable so
/// entries survive user deletion.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub log_id: i32,
    pub user_id: Option<i32>,
    pub action_type: String,
    pub description: Option<String>,
    pub timestamp: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
