//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let customer = factory::customer::create_customer(&db).await?;
//!     let asset = factory::asset::create_asset(&db).await?;
//!
//!     // Create the full topology chain
//!     let (headend, fdh, splitter) = factory::helpers::create_splitter_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let asset = factory::asset::AssetFactory::new(&db)
//!     .asset_type(AssetType::Router)
//!     .serial_number("SN-1234")
//!     .status(AssetStatus::Assigned)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user accounts
//! - `customer` - Create customers
//! - `asset` - Create inventory assets
//! - `technician` - Create field technicians
//! - `deployment_task` - Create deployment tasks
//! - `headend` / `fdh` / `splitter` - Create topology nodes
//! - `support_ticket` - Create support tickets
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod asset;
pub mod customer;
pub mod deployment_task;
pub mod fdh;
pub mod headend;
pub mod helpers;
pub mod splitter;
pub mod support_ticket;
pub mod technician;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use asset::create_asset;
pub use customer::create_customer;
pub use deployment_task::create_task;
pub use fdh::create_fdh;
pub use headend::create_headend;
pub use splitter::create_splitter;
pub use support_ticket::create_ticket;
pub use technician::create_technician;
pub use user::create_user;
