//! Technician factory for creating test field technicians.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test technicians with customizable fields.
pub struct TechnicianFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    contact: Option<String>,
    region: Option<String>,
}

impl<'a> TechnicianFactory<'a> {
    /// Creates a new TechnicianFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Technician {id}"` where id is auto-incremented
    /// - contact, region: unset
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Technician {}", id),
            contact: None,
            region: None,
        }
    }

    /// Sets the technician name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the service region.
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Builds and inserts the technician entity into the database.
    pub async fn build(self) -> Result<entity::technician::Model, DbErr> {
        entity::technician::ActiveModel {
            name: ActiveValue::Set(self.name),
            contact: ActiveValue::Set(self.contact),
            region: ActiveValue::Set(self.region),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a technician with default values.
///
/// Shorthand for `TechnicianFactory::new(db).build().await`.
pub async fn create_technician(
    db: &DatabaseConnection,
) -> Result<entity::technician::Model, DbErr> {
    TechnicianFactory::new(db).build().await
}
