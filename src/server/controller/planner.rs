use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::enums::UserRole;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::PlannerDashboardDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::planner::PlannerService,
        state::AppState,
    },
};

/// Tag for grouping planner endpoints in OpenAPI documentation
pub static PLANNER_TAG: &str = "planner";

/// Planner dashboard: port metrics, neighborhood rollups and FDH capacity.
#[utoipa::path(
    get,
    path = "/api/planner/dashboard",
    tag = PLANNER_TAG,
    responses(
        (status = 200, description = "Planner dashboard", body = PlannerDashboardDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::Planner)])
        .await?;

    let dashboard = PlannerService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}
