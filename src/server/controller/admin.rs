use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::AdminDashboardDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::admin::AdminService,
        state::AppState,
    },
};

/// Tag for grouping admin endpoints in OpenAPI documentation
pub static ADMIN_TAG: &str = "admin";

/// Admin dashboard: totals, recent audit activity and recent logins.
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Admin dashboard", body = AdminDashboardDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let dashboard = AdminService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}
