use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        audit::{AuditFilterOptionsDto, AuditLogDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::audit::AuditService,
        state::AppState,
    },
};

/// Tag for grouping audit endpoints in OpenAPI documentation
pub static AUDIT_TAG: &str = "audit";

const DEFAULT_LIMIT: u64 = 200;

#[derive(Deserialize)]
pub struct AuditLogParams {
    /// Restrict to one action type.
    pub action_type: Option<String>,
    /// Restrict to one acting user.
    pub user_id: Option<i32>,
    /// Maximum number of entries to return.
    pub limit: Option<u64>,
}

/// The audit trail, newest first, with optional filters.
#[utoipa::path(
    get,
    path = "/api/audit/logs",
    tag = AUDIT_TAG,
    params(
        ("action_type" = Option<String>, Query, description = "Filter by action type"),
        ("user_id" = Option<i32>, Query, description = "Filter by acting user"),
        ("limit" = Option<u64>, Query, description = "Maximum entries")
    ),
    responses(
        (status = 200, description = "Audit entries", body = Vec<AuditLogDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audit_logs(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AuditLogParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let logs = AuditService::new(&state.db)
        .list(
            params.action_type.as_deref(),
            params.user_id,
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
        .await?;

    Ok((StatusCode::OK, Json(logs)))
}

/// Distinct action types and usernames for the filter dropdowns.
#[utoipa::path(
    get,
    path = "/api/audit/filter-options",
    tag = AUDIT_TAG,
    responses(
        (status = 200, description = "Filter options", body = AuditFilterOptionsDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_filter_options(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let options = AuditService::new(&state.db).filter_options().await?;

    Ok((StatusCode::OK, Json(options)))
}
