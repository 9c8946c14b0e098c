use axum::{
    extract::{ConnectInfo, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::net::SocketAddr;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{LoginDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Session key holding the authenticated user's id.
pub static SESSION_AUTH_USER_ID: &str = "auth:user";

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Verifies credentials, establishes the session and records the login.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(
            &payload.username,
            &payload.password,
            Some(addr.ip().to_string()),
        )
        .await?;

    session.insert(SESSION_AUTH_USER_ID, user.user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Log out, closing the session and the open login record.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    if let Some(user_id) = session.get::<i32>(SESSION_AUTH_USER_ID).await? {
        AuthService::new(&state.db).logout(user_id).await?;
    }

    session.flush().await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Logged out".to_string(),
        }),
    ))
}

/// Get the currently authenticated user.
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current session user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(crate::server::model::user::User::from_entity(user).into_dto()),
    ))
}
