//! Splitter factory for creating test optical splitters.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test splitters with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::splitter::SplitterFactory;
///
/// let splitter = SplitterFactory::new(&db)
///     .fdh_id(fdh.fdh_id)
///     .port_capacity(8)
///     .used_ports(8)
///     .build()
///     .await?;
/// ```
pub struct SplitterFactory<'a> {
    db: &'a DatabaseConnection,
    fdh_id: Option<i32>,
    model: Option<String>,
    port_capacity: i32,
    used_ports: i32,
    location: Option<String>,
}

impl<'a> SplitterFactory<'a> {
    /// Creates a new SplitterFactory with default values.
    ///
    /// Defaults:
    /// - model: `"Splitter {id}"` where id is auto-incremented
    /// - port_capacity: `16`
    /// - used_ports: `0`
    /// - fdh, location: unset
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            fdh_id: None,
            model: Some(format!("Splitter {}", id)),
            port_capacity: 16,
            used_ports: 0,
            location: None,
        }
    }

    /// Sets the enclosing FDH.
    pub fn fdh_id(mut self, fdh_id: i32) -> Self {
        self.fdh_id = Some(fdh_id);
        self
    }

    /// Sets the port capacity.
    pub fn port_capacity(mut self, port_capacity: i32) -> Self {
        self.port_capacity = port_capacity;
        self
    }

    /// Sets the occupied port count.
    pub fn used_ports(mut self, used_ports: i32) -> Self {
        self.used_ports = used_ports;
        self
    }

    /// Builds and inserts the splitter entity into the database.
    pub async fn build(self) -> Result<entity::splitter::Model, DbErr> {
        entity::splitter::ActiveModel {
            fdh_id: ActiveValue::Set(self.fdh_id),
            model: ActiveValue::Set(self.model),
            port_capacity: ActiveValue::Set(self.port_capacity),
            used_ports: ActiveValue::Set(self.used_ports),
            location: ActiveValue::Set(self.location),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a splitter inside the given FDH with default values.
///
/// Shorthand for `SplitterFactory::new(db).fdh_id(fdh_id).build().await`.
pub async fn create_splitter(
    db: &DatabaseConnection,
    fdh_id: i32,
) -> Result<entity::splitter::Model, DbErr> {
    SplitterFactory::new(db).fdh_id(fdh_id).build().await
}
