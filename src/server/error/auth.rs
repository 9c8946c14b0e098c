use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Authentication and authorization errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Username or password did not match. 401.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// The account exists but has been disabled. 403.
    #[error("Account is disabled")]
    AccountDisabled,

    /// No user id present in the session. 401.
    #[error("User not found in session")]
    UserNotInSession,

    /// Session references a user that no longer exists. 401.
    #[error("User not found in database")]
    UserNotInDatabase,

    /// The user's role does not grant access to the resource. 403.
    #[error("Access denied")]
    AccessDenied,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidCredentials | Self::UserNotInSession | Self::UserNotInDatabase => {
                StatusCode::UNAUTHORIZED
            }
            Self::AccountDisabled | Self::AccessDenied => StatusCode::FORBIDDEN,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
