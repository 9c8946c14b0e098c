//! FDH factory for creating test fiber distribution hubs.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test FDHs with customizable fields.
pub struct FdhFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: Option<String>,
    region: Option<String>,
    max_ports: Option<i32>,
    headend_id: Option<i32>,
}

impl<'a> FdhFactory<'a> {
    /// Creates a new FdhFactory with default values.
    ///
    /// Defaults:
    /// - name: `"FDH {id}"` where id is auto-incremented
    /// - max_ports: `144`
    /// - location, region, headend: unset
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("FDH {}", id),
            location: None,
            region: None,
            max_ports: Some(144),
            headend_id: None,
        }
    }

    /// Sets the FDH name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the upstream headend.
    pub fn headend_id(mut self, headend_id: i32) -> Self {
        self.headend_id = Some(headend_id);
        self
    }

    /// Sets the maximum port count.
    pub fn max_ports(mut self, max_ports: i32) -> Self {
        self.max_ports = Some(max_ports);
        self
    }

    /// Builds and inserts the FDH entity into the database.
    pub async fn build(self) -> Result<entity::fdh::Model, DbErr> {
        entity::fdh::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            region: ActiveValue::Set(self.region),
            max_ports: ActiveValue::Set(self.max_ports),
            headend_id: ActiveValue::Set(self.headend_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an FDH under the given headend with default values.
///
/// Shorthand for `FdhFactory::new(db).headend_id(headend_id).build().await`.
pub async fn create_fdh(
    db: &DatabaseConnection,
    headend_id: i32,
) -> Result<entity::fdh::Model, DbErr> {
    FdhFactory::new(db).headend_id(headend_id).build().await
}
