//! User domain models and parameters.

use entity::enums::UserRole;
use sea_orm::ActiveEnum;

use crate::model::user::UserDto;

/// Application user without credential material.
///
/// Password hash and salt stay at the data layer; everything above works
/// with this model.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: i32,
    pub username: String,
    pub role: UserRole,
    pub active: bool,
}

impl User {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id,
            username: entity.username,
            role: entity.role,
            active: entity.active,
        }
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            user_id: self.user_id,
            username: self.username,
            role: self.role.to_value(),
        }
    }
}

/// Parameters for creating a user account.
pub struct CreateUserParams {
    pub username: String,
    pub password_hash: String,
    pub password_salt: String,
    pub role: UserRole,
}
