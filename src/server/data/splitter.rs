//! Splitter data repository.

use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Repository for passive optical splitters.
pub struct SplitterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SplitterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        fdh_id: Option<i32>,
        model: Option<String>,
        port_capacity: i32,
        location: Option<String>,
    ) -> Result<entity::splitter::Model, DbErr> {
        entity::prelude::Splitter::insert(entity::splitter::ActiveModel {
            fdh_id: ActiveValue::Set(fdh_id),
            model: ActiveValue::Set(model),
            port_capacity: ActiveValue::Set(port_capacity),
            used_ports: ActiveValue::Set(0),
            location: ActiveValue::Set(location),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        splitter_id: i32,
    ) -> Result<Option<entity::splitter::Model>, DbErr> {
        entity::prelude::Splitter::find_by_id(splitter_id)
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::splitter::Model>, DbErr> {
        entity::prelude::Splitter::find()
            .order_by_asc(entity::splitter::Column::SplitterId)
            .all(self.db)
            .await
    }

    /// Lists splitters housed in one FDH.
    pub async fn find_by_fdh(&self, fdh_id: i32) -> Result<Vec<entity::splitter::Model>, DbErr> {
        entity::prelude::Splitter::find()
            .filter(entity::splitter::Column::FdhId.eq(fdh_id))
            .order_by_asc(entity::splitter::Column::SplitterId)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Splitter::find().count(self.db).await
    }

    /// Sums port capacity and usage across all splitters.
    ///
    /// # Returns
    /// - `Ok((total_ports, used_ports))`
    pub async fn port_totals(&self) -> Result<(i64, i64), DbErr> {
        #[derive(Debug, sea_orm::FromQueryResult)]
        struct Totals {
            total_ports: Option<i64>,
            used_ports: Option<i64>,
        }

        let totals = entity::prelude::Splitter::find()
            .select_only()
            .column_as(entity::splitter::Column::PortCapacity.sum(), "total_ports")
            .column_as(entity::splitter::Column::UsedPorts.sum(), "used_ports")
            .into_model::<Totals>()
            .one(self.db)
            .await?;

        let totals = totals.unwrap_or(Totals {
            total_ports: None,
            used_ports: None,
        });

        Ok((
            totals.total_ports.unwrap_or(0),
            totals.used_ports.unwrap_or(0),
        ))
    }

    /// Sets a splitter's used port count. Callers enforce the capacity
    /// bound before writing.
    pub async fn set_used_ports(&self, splitter_id: i32, used_ports: i32) -> Result<(), DbErr> {
        entity::prelude::Splitter::update_many()
            .filter(entity::splitter::Column::SplitterId.eq(splitter_id))
            .col_expr(
                entity::splitter::Column::UsedPorts,
                sea_orm::sea_query::Expr::value(used_ports),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
