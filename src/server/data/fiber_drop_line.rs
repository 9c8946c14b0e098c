//! Fiber drop line data repository.

use entity::enums::LineStatus;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

/// Repository for physical drop lines from splitter ports to premises.
pub struct FiberDropLineRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FiberDropLineRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        from_splitter_id: Option<i32>,
        to_customer_id: Option<i32>,
        length_meters: Option<f64>,
    ) -> Result<entity::fiber_drop_line::Model, DbErr> {
        entity::prelude::FiberDropLine::insert(entity::fiber_drop_line::ActiveModel {
            from_splitter_id: ActiveValue::Set(from_splitter_id),
            to_customer_id: ActiveValue::Set(to_customer_id),
            length_meters: ActiveValue::Set(length_meters),
            status: ActiveValue::Set(LineStatus::Active),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Marks a customer's drop lines as disconnected.
    pub async fn disconnect_by_customer(&self, customer_id: i32) -> Result<(), DbErr> {
        entity::prelude::FiberDropLine::update_many()
            .filter(entity::fiber_drop_line::Column::ToCustomerId.eq(customer_id))
            .col_expr(
                entity::fiber_drop_line::Column::Status,
                sea_orm::sea_query::Expr::value(LineStatus::Disconnected),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
