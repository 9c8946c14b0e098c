//! Technician data repository.

use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::server::model::task::Technician;

/// Repository providing database operations for field technicians.
pub struct TechnicianRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TechnicianRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        name: String,
        contact: Option<String>,
        region: Option<String>,
    ) -> Result<Technician, DbErr> {
        let entity = entity::prelude::Technician::insert(entity::technician::ActiveModel {
            name: ActiveValue::Set(name),
            contact: ActiveValue::Set(contact),
            region: ActiveValue::Set(region),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Technician::from_entity(entity))
    }

    pub async fn find_by_id(&self, technician_id: i32) -> Result<Option<Technician>, DbErr> {
        let entity = entity::prelude::Technician::find_by_id(technician_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Technician::from_entity))
    }

    /// Lists all technicians ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Technician>, DbErr> {
        let entities = entity::prelude::Technician::find()
            .order_by_asc(entity::technician::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Technician::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Technician::find().count(self.db).await
    }
}
