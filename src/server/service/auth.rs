//! Authentication service.
//!
//! Verifies credentials against the stored salted hashes and keeps the login
//! bookkeeping (last-login stamp, session log, audit trail). Session state
//! itself is owned by the auth controller.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{audit::UserLogRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::User,
    service::audit::AuditService,
    util::password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verifies a username/password pair and records the login.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid; last-login stamped and session logged
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    /// - `Err(AuthError::AccountDisabled)` - Credentials valid but account disabled
    pub async fn login(
        &self,
        username: &str,
        plaintext_password: &str,
        ip_address: Option<String>,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !password::verify_password(plaintext_password, &user.password_salt, &user.password_hash)
        {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.active {
            return Err(AuthError::AccountDisabled.into());
        }

        user_repo.touch_last_login(user.user_id).await?;

        UserLogRepository::new(self.db)
            .record_login(user.user_id, ip_address)
            .await?;

        AuditService::new(self.db)
            .log(
                Some(user.user_id),
                "LOGIN",
                &format!("User '{}' logged in", user.username),
            )
            .await;

        Ok(User::from_entity(user))
    }

    /// Records a logout on the user's open session log entry.
    pub async fn logout(&self, user_id: i32) -> Result<(), AppError> {
        UserLogRepository::new(self.db)
            .record_logout(user_id)
            .await?;

        AuditService::new(self.db)
            .log(Some(user_id), "LOGOUT", "User logged out")
            .await;

        Ok(())
    }
}
