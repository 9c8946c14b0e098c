//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors
//! and implements `IntoResponse` so handlers can return `Result<_, AppError>`
//! directly. Internal failures are logged server-side and surface to clients
//! as a generic message to avoid leaking implementation details.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error; maps to its own status codes.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM. 500 with details logged.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error. 500 with details logged.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Resource not found. 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request or rejected state transition. 400 with the provided
    /// message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with a message that is logged but never
    /// returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response with a
/// generic body. Used as the fallback for infrastructure errors that carry
/// no client-facing mapping.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
