use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Customer, Asset};
///
/// let test = TestBuilder::new()
///     .with_table(Customer)
///     .with_table(Asset)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables touched by customer onboarding.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Technician
    /// - Customer
    /// - NetworkConnection
    /// - DeploymentTask
    /// - TaskChecklist
    /// - AuditLog
    ///
    /// Use this when testing onboarding or task flows end to end.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_onboarding_tables(self) -> Self {
        self.with_table(Technician)
            .with_table(Customer)
            .with_table(NetworkConnection)
            .with_table(DeploymentTask)
            .with_table(TaskChecklist)
            .with_table(AuditLog)
    }

    /// Adds all tables required for the network topology hierarchy.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Headend
    /// - Fdh
    /// - Splitter
    /// - Customer
    /// - FiberDropLine
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_network_tables(self) -> Self {
        self.with_table(Headend)
            .with_table(Fdh)
            .with_table(Splitter)
            .with_table(Customer)
            .with_table(FiberDropLine)
    }

    /// Adds all tables required for asset allocation flows.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - Customer
    /// - Asset
    /// - AssignedAsset
    /// - AuditLog
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_allocation_tables(self) -> Self {
        self.with_table(Customer)
            .with_table(Asset)
            .with_table(AssignedAsset)
            .with_table(AuditLog)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`. Tables are created in the order
    /// they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
