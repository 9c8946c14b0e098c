//! User factory for creating test user accounts.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use entity::enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios. Password
/// hash and salt default to opaque placeholder strings; tests exercising
/// credential verification should set real values via `password()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .username("planner1")
///     .role(UserRole::Planner)
///     .active(false)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    password_hash: String,
    password_salt: String,
    role: UserRole,
    active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - username: `"user_{id}"` where id is auto-incremented
    /// - password_hash / password_salt: placeholder strings
    /// - role: `UserRole::Technician`
    /// - active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("user_{}", id),
            password_hash: "not-a-real-hash".to_string(),
            password_salt: "not-a-real-salt".to_string(),
            role: UserRole::Technician,
            active: true,
        }
    }

    /// Sets the username for the user.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the stored password hash and salt.
    ///
    /// # Arguments
    /// - `hash` - Hex-encoded password hash
    /// - `salt` - Hex-encoded salt the hash was derived with
    pub fn password(mut self, hash: impl Into<String>, salt: impl Into<String>) -> Self {
        self.password_hash = hash.into();
        self.password_salt = salt.into();
        self
    }

    /// Sets the role for the user.
    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    /// Sets whether the account is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            username: ActiveValue::Set(self.username),
            password_hash: ActiveValue::Set(self.password_hash),
            password_salt: ActiveValue::Set(self.password_salt),
            role: ActiveValue::Set(self.role),
            last_login: ActiveValue::Set(None),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}
