use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use entity::enums::UserRole;

use crate::server::{
    controller::auth::SESSION_AUTH_USER_ID,
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
};

/// Access requirements checked by [`AuthGuard::require`].
///
/// Admins pass every check; a `Role` or `AnyRole` requirement therefore
/// accepts an admin in addition to the named roles.
pub enum Permission {
    Admin,
    Role(UserRole),
    AnyRole(&'static [UserRole]),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase.into());
        };

        if !user.active {
            return Err(AuthError::AccountDisabled.into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied.into());
                    }
                }
                Permission::Role(role) => {
                    if user.role != *role && user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied.into());
                    }
                }
                Permission::AnyRole(roles) => {
                    if !roles.contains(&user.role) && user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied.into());
                    }
                }
            }
        }

        Ok(user)
    }
}
