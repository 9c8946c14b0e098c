use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::enums::UserRole;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::TechnicianDashboardDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::technician::TechnicianService,
        state::AppState,
    },
};

/// Tag for grouping technician endpoints in OpenAPI documentation
pub static TECHNICIAN_TAG: &str = "technician";

/// Technician dashboard: work queue stats and the task list.
#[utoipa::path(
    get,
    path = "/api/technician/dashboard",
    tag = TECHNICIAN_TAG,
    responses(
        (status = 200, description = "Technician dashboard", body = TechnicianDashboardDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::Technician)])
        .await?;

    let dashboard = TechnicianService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}
