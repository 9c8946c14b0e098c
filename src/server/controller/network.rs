use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, network::NetworkTopologyDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::network::NetworkService,
        state::AppState,
    },
};

/// Tag for grouping network endpoints in OpenAPI documentation
pub static NETWORK_TAG: &str = "network";

/// Get the headend → FDH → splitter → customer topology tree with metrics.
#[utoipa::path(
    get,
    path = "/api/network/topology",
    tag = NETWORK_TAG,
    responses(
        (status = 200, description = "Network topology", body = NetworkTopologyDto),
        (status = 404, description = "No headend configured", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topology(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let topology = NetworkService::new(&state.db).topology().await?;

    Ok((StatusCode::OK, Json(topology)))
}
