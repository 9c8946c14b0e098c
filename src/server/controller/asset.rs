use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::{AssetStatus, AssetType, UserRole};
use sea_orm::ActiveEnum;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        asset::{AssetDto, AssetRequestDto, AssetStatsDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::asset::{Asset, CreateAssetParams, UpdateAssetParams},
        service::asset::AssetService,
        state::AppState,
    },
};

/// Tag for grouping asset endpoints in OpenAPI documentation
pub static ASSET_TAG: &str = "assets";

/// Roles allowed to mutate the inventory (admins always pass).
const ASSET_WRITERS: &[UserRole] = &[UserRole::DeploymentLead];

fn parse_asset_type(value: &str) -> Result<AssetType, AppError> {
    AssetType::try_from_value(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("Unknown asset type '{}'", value)))
}

fn parse_asset_status(value: &str) -> Result<AssetStatus, AppError> {
    AssetStatus::try_from_value(&value.to_string())
        .map_err(|_| AppError::BadRequest(format!("Unknown asset status '{}'", value)))
}

/// List all assets in the inventory.
#[utoipa::path(
    get,
    path = "/api/assets",
    tag = ASSET_TAG,
    responses(
        (status = 200, description = "All assets", body = Vec<AssetDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_assets(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let assets = AssetService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(assets.into_iter().map(Asset::into_dto).collect::<Vec<_>>()),
    ))
}

/// Per-type, per-status inventory counts for the stat cards.
#[utoipa::path(
    get,
    path = "/api/assets/stats",
    tag = ASSET_TAG,
    responses(
        (status = 200, description = "Inventory stats", body = AssetStatsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let stats = AssetService::new(&state.db).stats().await?;

    Ok((StatusCode::OK, Json(stats)))
}

/// Get a single asset.
#[utoipa::path(
    get,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset", body = AssetDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_asset(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let asset = AssetService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(asset.into_dto())))
}

/// Create an inventory asset.
#[utoipa::path(
    post,
    path = "/api/assets",
    tag = ASSET_TAG,
    request_body = AssetRequestDto,
    responses(
        (status = 201, description = "Asset created", body = AssetDto),
        (status = 400, description = "Invalid asset data or duplicate serial", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_asset(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AssetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(ASSET_WRITERS)])
        .await?;

    let params = CreateAssetParams {
        asset_type: parse_asset_type(&payload.asset_type)?,
        model: payload.model,
        serial_number: payload.serial_number,
        status: parse_asset_status(&payload.status)?,
        location: payload.location,
    };

    let asset = AssetService::new(&state.db)
        .create(params, user.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(asset.into_dto())))
}

/// Update an asset's descriptive fields.
#[utoipa::path(
    put,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    request_body = AssetRequestDto,
    responses(
        (status = 200, description = "Asset updated", body = AssetDto),
        (status = 400, description = "Invalid asset data", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_asset(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AssetRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(ASSET_WRITERS)])
        .await?;

    let params = UpdateAssetParams {
        asset_type: parse_asset_type(&payload.asset_type)?,
        model: payload.model,
        serial_number: payload.serial_number,
        status: parse_asset_status(&payload.status)?,
        location: payload.location,
    };

    let asset = AssetService::new(&state.db)
        .update(id, params, user.user_id)
        .await?;

    Ok((StatusCode::OK, Json(asset.into_dto())))
}

/// Delete an asset. Assigned assets must be deallocated first.
#[utoipa::path(
    delete,
    path = "/api/assets/{id}",
    tag = ASSET_TAG,
    params(("id" = i32, Path, description = "Asset ID")),
    responses(
        (status = 200, description = "Asset deleted", body = MessageDto),
        (status = 400, description = "Asset is assigned", body = ErrorDto),
        (status = 404, description = "Asset not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(ASSET_WRITERS)])
        .await?;

    AssetService::new(&state.db).delete(id, user.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Asset deleted".to_string(),
        }),
    ))
}
