//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Transaction Management**: Handling multi-step operations (allocation,
//!   onboarding, splitter attachment) atomically
//!
//! CRUD-style services work with domain models; reporting services (dashboards,
//! topology, audit views) assemble their response DTOs directly.

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

#[cfg(test)]
mod test;
