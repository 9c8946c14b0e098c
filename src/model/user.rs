use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login credentials.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

/// Authenticated user identity returned by login and the session probe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub username: String,
    /// Role name: Admin, Planner, Technician, SupportAgent, FieldEngineer
    /// or DeploymentLead.
    pub role: String,
}
