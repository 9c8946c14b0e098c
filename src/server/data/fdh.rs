//! FDH data repository.

use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

/// Repository for fiber distribution hubs.
pub struct FdhRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FdhRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<entity::fdh::Model>, DbErr> {
        entity::prelude::Fdh::find()
            .order_by_asc(entity::fdh::Column::FdhId)
            .all(self.db)
            .await
    }

    /// Lists FDHs fed by one headend.
    pub async fn find_by_headend(&self, headend_id: i32) -> Result<Vec<entity::fdh::Model>, DbErr> {
        entity::prelude::Fdh::find()
            .filter(entity::fdh::Column::HeadendId.eq(headend_id))
            .order_by_asc(entity::fdh::Column::FdhId)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Fdh::find().count(self.db).await
    }
}
