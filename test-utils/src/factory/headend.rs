//! Headend factory for creating test topology roots.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test headends with customizable fields.
pub struct HeadendFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: Option<String>,
    region: Option<String>,
}

impl<'a> HeadendFactory<'a> {
    /// Creates a new HeadendFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Headend {id}"` where id is auto-incremented
    /// - location, region: unset
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Headend {}", id),
            location: None,
            region: None,
        }
    }

    /// Sets the headend name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Builds and inserts the headend entity into the database.
    pub async fn build(self) -> Result<entity::headend::Model, DbErr> {
        entity::headend::ActiveModel {
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            region: ActiveValue::Set(self.region),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a headend with default values.
///
/// Shorthand for `HeadendFactory::new(db).build().await`.
pub async fn create_headend(db: &DatabaseConnection) -> Result<entity::headend::Model, DbErr> {
    HeadendFactory::new(db).build().await
}
