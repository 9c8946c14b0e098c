//! Request/response DTOs shared by every API endpoint.
//!
//! These types define the JSON wire shapes. Conversion from domain models
//! happens in the server layer via `into_dto` methods; status enums are
//! carried as their string values on the wire.

pub mod api;
pub mod asset;
pub mod audit;
pub mod customer;
pub mod dashboard;
pub mod network;
pub mod task;
pub mod user;
