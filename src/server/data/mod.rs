//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories are generic over SeaORM's `ConnectionTrait` so
//! services can run them against either the shared connection pool or an open transaction.
//! All database queries, inserts, updates, and deletes are performed through these
//! repositories.

pub mod asset;
pub mod assigned_asset;
pub mod audit;
pub mod customer;
pub mod fdh;
pub mod fiber_drop_line;
pub mod headend;
pub mod network_connection;
pub mod splitter;
pub mod support_ticket;
pub mod task;
pub mod task_checklist;
pub mod task_note;
pub mod technician;
pub mod user;

#[cfg(test)]
mod test;
