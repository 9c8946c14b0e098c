//! HTTP request handlers, one module per API surface.
//!
//! Controllers validate access through the auth guard, convert DTOs to
//! parameter types, call into the service layer and shape the HTTP response.
//! Every handler carries a `#[utoipa::path]` annotation feeding the OpenAPI
//! document served at `/swagger-ui`.

pub mod admin;
pub mod asset;
pub mod audit;
pub mod auth;
pub mod customer;
pub mod deployment_lead;
pub mod field_engineer;
pub mod network;
pub mod planner;
pub mod support;
pub mod task;
pub mod technician;
