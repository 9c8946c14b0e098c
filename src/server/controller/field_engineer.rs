use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use entity::enums::UserRole;
use sea_orm::ActiveEnum;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        customer::{CreateCustomerDto, CreateCustomerResponseDto},
        dashboard::FieldEngineerDashboardDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::{customer::CustomerService, field_engineer::FieldEngineerService},
        state::AppState,
    },
};

/// Tag for grouping field engineer endpoints in OpenAPI documentation
pub static FIELD_ENGINEER_TAG: &str = "field-engineer";

/// Field engineer dashboard: intake stats and recent customers.
#[utoipa::path(
    get,
    path = "/api/field-engineer/dashboard",
    tag = FIELD_ENGINEER_TAG,
    responses(
        (status = 200, description = "Field engineer dashboard", body = FieldEngineerDashboardDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::FieldEngineer)])
        .await?;

    let dashboard = FieldEngineerService::new(&state.db).dashboard().await?;

    Ok((StatusCode::OK, Json(dashboard)))
}

/// Create a Pending customer from the quick intake form.
#[utoipa::path(
    post,
    path = "/api/field-engineer/create-customer",
    tag = FIELD_ENGINEER_TAG,
    request_body = CreateCustomerDto,
    responses(
        (status = 201, description = "Customer created", body = CreateCustomerResponseDto),
        (status = 400, description = "Invalid customer data", body = ErrorDto),
        (status = 403, description = "Insufficient role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_customer(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCustomerDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Role(UserRole::FieldEngineer)])
        .await?;

    let customer = CustomerService::new(&state.db)
        .create(payload, user.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateCustomerResponseDto {
            customer_id: customer.customer_id,
            name: customer.name,
            status: customer.status.to_value(),
            message: "Customer created".to_string(),
        }),
    ))
}
