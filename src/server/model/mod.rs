//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Reporting-oriented services (dashboards, topology, audit views) build their DTOs
//! directly from query results and have no domain model here.

pub mod asset;
pub mod customer;
pub mod task;
pub mod user;
