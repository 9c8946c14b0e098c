use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Audit trail entry with the acting username resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuditLogDto {
    pub log_id: i32,
    pub username: Option<String>,
    pub action_type: String,
    pub description: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Distinct values offered by the audit log filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuditFilterOptionsDto {
    pub action_types: Vec<String>,
    pub users: Vec<String>,
}

/// Login session entry on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserLogDto {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub login_time: DateTime<Utc>,
}
