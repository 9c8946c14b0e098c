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
        api::{ErrorDto, MessageDto},
        customer::{
            AssignSplitterPortDto, CustomerDetailDto, CustomerDto, CustomerOnboardingDto,
            CustomerOnboardingResponseDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::customer::CustomerService,
        state::AppState,
    },
};

/// Tag for grouping customer endpoints in OpenAPI documentation
pub static CUSTOMER_TAG: &str = "customers";

/// Roles allowed to run onboarding (admins always pass).
const ONBOARDERS: &[UserRole] = &[UserRole::FieldEngineer, UserRole::DeploymentLead];

/// Roles allowed to manage splitter port attachments.
const PORT_MANAGERS: &[UserRole] = &[UserRole::Planner, UserRole::DeploymentLead];

/// Onboard a new customer.
///
/// Transactionally creates the customer, their network connection record and
/// a scheduled installation task seeded with the default checklist.
#[utoipa::path(
    post,
    path = "/api/customers/onboard",
    tag = CUSTOMER_TAG,
    request_body = CustomerOnboardingDto,
    responses(
        (status = 201, description = "Customer onboarded", body = CustomerOnboardingResponseDto),
        (status = 400, description = "Invalid onboarding data", body = ErrorDto),
        (status = 404, description = "Technician not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn onboard_customer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CustomerOnboardingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(ONBOARDERS)])
        .await?;

    let response = CustomerService::new(&state.db)
        .onboard(payload, user.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// List all customers.
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = CUSTOMER_TAG,
    responses(
        (status = 200, description = "All customers", body = Vec<CustomerDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customers(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let customers = CustomerService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            customers
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a single customer with splitter and asset detail.
#[utoipa::path(
    get,
    path = "/api/customers/{id}",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Customer detail", body = CustomerDetailDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_customer(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = CustomerService::new(&state.db).detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Attach a customer to a splitter port.
#[utoipa::path(
    post,
    path = "/api/customers/{id}/splitter",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    request_body = AssignSplitterPortDto,
    responses(
        (status = 200, description = "Port assigned", body = MessageDto),
        (status = 400, description = "Splitter full or port taken", body = ErrorDto),
        (status = 404, description = "Customer or splitter not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_splitter_port(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AssignSplitterPortDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(PORT_MANAGERS)])
        .await?;

    CustomerService::new(&state.db)
        .assign_splitter_port(id, payload, user.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Splitter port assigned".to_string(),
        }),
    ))
}

/// Detach a customer from their splitter port.
#[utoipa::path(
    delete,
    path = "/api/customers/{id}/splitter",
    tag = CUSTOMER_TAG,
    params(("id" = i32, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Port released", body = MessageDto),
        (status = 400, description = "Customer not attached to a splitter", body = ErrorDto),
        (status = 404, description = "Customer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn release_splitter_port(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(PORT_MANAGERS)])
        .await?;

    CustomerService::new(&state.db)
        .release_splitter_port(id, user.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Splitter port released".to_string(),
        }),
    ))
}
