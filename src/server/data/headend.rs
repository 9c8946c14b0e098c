//! Headend data repository.

use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

/// Repository for headends, the roots of the network hierarchy.
pub struct HeadendRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> HeadendRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        location: Option<String>,
        region: Option<String>,
    ) -> Result<entity::headend::Model, DbErr> {
        entity::prelude::Headend::insert(entity::headend::ActiveModel {
            name: ActiveValue::Set(name),
            location: ActiveValue::Set(location),
            region: ActiveValue::Set(region),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::headend::Model>, DbErr> {
        entity::prelude::Headend::find()
            .order_by_asc(entity::headend::Column::HeadendId)
            .all(self.db)
            .await
    }
}
