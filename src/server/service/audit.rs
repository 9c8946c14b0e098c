//! Audit trail service.
//!
//! Audit writes are fire-and-forget: a failed write logs a warning and the
//! business operation that triggered it still succeeds. Reads back the trail
//! for the admin views with usernames resolved.

use std::collections::HashMap;

use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::audit::{AuditFilterOptionsDto, AuditLogDto, UserLogDto},
    server::{
        data::{
            audit::{AuditLogRepository, UserLogRepository},
            user::UserRepository,
        },
        error::AppError,
    },
};

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an audit entry. Never fails the calling operation; a write
    /// error is logged and swallowed.
    pub async fn log(&self, user_id: Option<i32>, action_type: &str, description: &str) {
        let repo = AuditLogRepository::new(self.db);

        if let Err(err) = repo
            .create(user_id, action_type.to_string(), Some(description.to_string()))
            .await
        {
            tracing::warn!("Failed to write audit log entry '{}': {}", action_type, err);
        }
    }

    /// Lists audit entries with optional filters, newest first.
    pub async fn list(
        &self,
        action_type: Option<&str>,
        user_id: Option<i32>,
        limit: u64,
    ) -> Result<Vec<AuditLogDto>, AppError> {
        let repo = AuditLogRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let entries = repo.find_filtered(action_type, user_id, limit).await?;

        let usernames: HashMap<i32, String> = user_repo
            .get_all()
            .await?
            .into_iter()
            .map(|u| (u.user_id, u.username))
            .collect();

        Ok(entries
            .into_iter()
            .map(|entry| AuditLogDto {
                log_id: entry.log_id,
                username: entry.user_id.and_then(|id| usernames.get(&id).cloned()),
                action_type: entry.action_type,
                description: entry.description,
                timestamp: entry.timestamp,
            })
            .collect())
    }

    /// Returns the distinct action types and usernames for the audit filter
    /// dropdowns.
    pub async fn filter_options(&self) -> Result<AuditFilterOptionsDto, AppError> {
        let repo = AuditLogRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let action_types = repo.distinct_action_types().await?;
        let users = user_repo
            .get_all()
            .await?
            .into_iter()
            .map(|u| u.username)
            .collect();

        Ok(AuditFilterOptionsDto {
            action_types,
            users,
        })
    }

    /// Lists recent login sessions with usernames and roles resolved.
    pub async fn recent_logins(&self, limit: u64) -> Result<Vec<UserLogDto>, AppError> {
        let log_repo = UserLogRepository::new(self.db);
        let user_repo = UserRepository::new(self.db);

        let logs = log_repo.recent_logins(limit).await?;

        let users: HashMap<i32, _> = user_repo
            .get_all()
            .await?
            .into_iter()
            .map(|u| (u.user_id, u))
            .collect();

        Ok(logs
            .into_iter()
            .map(|log| {
                let user = users.get(&log.user_id);
                UserLogDto {
                    id: log.id,
                    username: user
                        .map(|u| u.username.clone())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    role: user
                        .map(|u| u.role.to_value())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    login_time: log.login_time,
                }
            })
            .collect())
    }
}
