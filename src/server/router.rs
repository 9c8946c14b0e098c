//! Axum route configuration and OpenAPI documentation.

use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin, asset, audit, auth, customer, deployment_lead, field_engineer, network, planner,
        support, task, technician,
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "FiberFlow API", description = "Fiber network management backend"),
    paths(
        auth::login,
        auth::logout,
        auth::get_user,
        asset::get_assets,
        asset::get_asset_stats,
        asset::get_asset,
        asset::create_asset,
        asset::update_asset,
        asset::delete_asset,
        customer::onboard_customer,
        customer::get_customers,
        customer::get_customer,
        customer::assign_splitter_port,
        customer::release_splitter_port,
        task::get_tasks,
        task::get_technicians,
        task::get_task_details,
        task::update_task_status,
        task::update_task_checklist,
        task::add_task_note,
        network::get_topology,
        admin::get_dashboard,
        planner::get_dashboard,
        technician::get_dashboard,
        support::get_dashboard,
        support::get_customer_detail,
        field_engineer::get_dashboard,
        field_engineer::create_customer,
        deployment_lead::get_dashboard,
        deployment_lead::get_available_assets,
        deployment_lead::allocate_asset,
        deployment_lead::deallocate_asset,
        audit::get_audit_logs,
        audit::get_filter_options,
    )
)]
pub struct ApiDoc;

/// Builds the full API router, including the Swagger UI.
pub fn router(cors_origin: &str) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_credentials(true)
        .allow_headers([axum::http::header::CONTENT_TYPE])
        .allow_origin(
            cors_origin
                .parse::<HeaderValue>()
                .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:5173")),
        );

    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/assets", get(asset::get_assets).post(asset::create_asset))
        .route("/api/assets/stats", get(asset::get_asset_stats))
        .route(
            "/api/assets/{id}",
            get(asset::get_asset)
                .put(asset::update_asset)
                .delete(asset::delete_asset),
        )
        .route("/api/customers", get(customer::get_customers))
        .route("/api/customers/onboard", post(customer::onboard_customer))
        .route("/api/customers/{id}", get(customer::get_customer))
        .route(
            "/api/customers/{id}/splitter",
            post(customer::assign_splitter_port).delete(customer::release_splitter_port),
        )
        .route("/api/tasks", get(task::get_tasks))
        .route("/api/tasks/technicians", get(task::get_technicians))
        .route("/api/tasks/{id}/details", get(task::get_task_details))
        .route("/api/tasks/{id}/status", put(task::update_task_status))
        .route("/api/tasks/{id}/checklist", put(task::update_task_checklist))
        .route("/api/tasks/{id}/notes", post(task::add_task_note))
        .route("/api/network/topology", get(network::get_topology))
        .route("/api/admin/dashboard", get(admin::get_dashboard))
        .route("/api/planner/dashboard", get(planner::get_dashboard))
        .route("/api/technician/dashboard", get(technician::get_dashboard))
        .route("/api/support/dashboard", get(support::get_dashboard))
        .route("/api/support/customer/{id}", get(support::get_customer_detail))
        .route(
            "/api/field-engineer/dashboard",
            get(field_engineer::get_dashboard),
        )
        .route(
            "/api/field-engineer/create-customer",
            post(field_engineer::create_customer),
        )
        .route(
            "/api/deployment-lead/dashboard",
            get(deployment_lead::get_dashboard),
        )
        .route(
            "/api/deployment-lead/available-assets",
            get(deployment_lead::get_available_assets),
        )
        .route(
            "/api/deployment-lead/allocate-asset",
            post(deployment_lead::allocate_asset),
        )
        .route(
            "/api/deployment-lead/deallocate-asset",
            post(deployment_lead::deallocate_asset),
        )
        .route("/api/audit/logs", get(audit::get_audit_logs))
        .route("/api/audit/filter-options", get(audit::get_filter_options))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
}
