use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::UserRole;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        customer::CustomerDetailDto,
        dashboard::SupportDashboardDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{customer::CustomerService, support::SupportService},
        state::AppState,
    },
};

/// Tag for grouping support endpoints in OpenAPI documentation
pub static SUPPORT_TAG: &str = "support";

/// Support dashboard: ticket metrics, customers and recent tickets.
#[utoipa::path(
    get,
    path = "/api/support/dashboard",
    tag = SUPPORT_TAG,
    responses(
        (status = 200, description = "Support dashboard", body = SupportDashboardDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::SupportAgent)])
        .await?;

    let dashboard = SupportService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Customer detail with splitter info and allocated assets.
#[utoipa::path(
    get,
    path = "/api/support/customer/{id}",
    tag = SUPPORT_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer detail", body = CustomerDetailDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::SupportAgent)])
        .await?;

    let detail = CustomerService::new(&state.db).detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}
