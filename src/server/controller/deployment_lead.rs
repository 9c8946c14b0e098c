use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::{AssetType, UserRole};
use sea_orm::ActiveEnum;
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        asset::{AllocateAssetDto, AvailableAssetDto, DeallocateAssetDto},
        dashboard::DeploymentLeadDashboardDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::asset::Asset,
        service::{asset::AssetService, deployment_lead::DeploymentLeadService},
        state::AppState,
    },
};

/// Tag for grouping deployment lead endpoints in OpenAPI documentation
pub static DEPLOYMENT_LEAD_TAG: &str = "deployment-lead";

#[derive(Deserialize)]
pub struct AvailableAssetsParams {
    /// Asset type to list, e.g. `ONT` or `Router`.
    #[serde(rename = "type")]
    pub asset_type: String,
}

/// Deployment lead dashboard: allocation stats and customers with assets.
#[utoipa::path(
    get,
    path = "/api/deployment-lead/dashboard",
    tag = DEPLOYMENT_LEAD_TAG,
    responses(
        (status = 200, description = "Deployment lead dashboard", body = DeploymentLeadDashboardDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::DeploymentLead)])
        .await?;

    let dashboard = DeploymentLeadService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Available assets of one type, for the allocation picker.
#[utoipa::path(
    get,
    path = "/api/deployment-lead/available-assets",
    tag = DEPLOYMENT_LEAD_TAG,
    params(("type" = String, Query, description = "Asset type")),
    responses(
        (status = 200, description = "Available assets", body = Vec<AvailableAssetDto>),
        (status = 400, description = "Unknown asset type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_assets(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<AvailableAssetsParams>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::DeploymentLead)])
        .await?;

    let asset_type = AssetType::try_from_value(&params.asset_type).map_err(|_| {
        AppError::BadRequest(format!("Unknown asset type '{}'", params.asset_type))
    })?;

    let assets = AssetService::new(&state.db)
        .available_by_type(asset_type)
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            assets
                .into_iter()
                .map(Asset::into_available_dto)
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Allocate an available asset to a customer.
#[utoipa::path(
    post,
    path = "/api/deployment-lead/allocate-asset",
    tag = DEPLOYMENT_LEAD_TAG,
    request_body = AllocateAssetDto,
    responses(
        (status = 200, description = "Asset allocated", body = MessageDto),
        (status = 400, description = "Asset not available", body = ErrorDto),
        (status = 404, description = "Asset or customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn allocate_asset(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AllocateAssetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::DeploymentLead)])
        .await?;

    AssetService::new(&state.db)
        .allocate(payload, user.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Asset allocated".to_string(),
        }),
    ))
}

/// Return an allocated asset to the available pool.
#[utoipa::path(
    post,
    path = "/api/deployment-lead/deallocate-asset",
    tag = DEPLOYMENT_LEAD_TAG,
    request_body = DeallocateAssetDto,
    responses(
        (status = 200, description = "Asset deallocated", body = MessageDto),
        (status = 400, description = "Asset not assigned to that customer", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn deallocate_asset(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<DeallocateAssetDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::DeploymentLead)])
        .await?;

    AssetService::new(&state.db)
        .deallocate(payload, user.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Asset deallocated".to_string(),
        }),
    ))
}
