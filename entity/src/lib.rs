//! SeaORM entity models for the FiberFlow schema.

pub mod prelude;

pub mod asset;
pub mod assigned_asset;
pub mod audit_log;
pub mod customer;
pub mod deployment_task;
pub mod enums;
pub mod fdh;
pub mod fiber_drop_line;
pub mod headend;
pub mod network_connection;
pub mod splitter;
pub mod support_ticket;
pub mod task_checklist;
pub mod task_note;
pub mod technician;
pub mod user;
pub mod user_log;
