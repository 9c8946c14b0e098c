//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a splitter with its full upstream topology.
///
/// This is a convenience method that creates:
/// 1. Headend
/// 2. FDH under the headend
/// 3. Splitter inside the FDH
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((headend, fdh, splitter))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_splitter_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::headend::Model,
        entity::fdh::Model,
        entity::splitter::Model,
    ),
    DbErr,
> {
    let headend = crate::factory::headend::create_headend(db).await?;
    let fdh = crate::factory::fdh::create_fdh(db, headend.headend_id).await?;
    let splitter = crate::factory::splitter::create_splitter(db, fdh.fdh_id).await?;

    Ok((headend, fdh, splitter))
}

/// Creates a deployment task with a customer and technician attached.
///
/// Useful when testing task listings and dashboards where the task names
/// must resolve against real customer and technician rows.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((customer, technician, task))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_task_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::customer::Model,
        entity::technician::Model,
        entity::deployment_task::Model,
    ),
    DbErr,
> {
    let customer = crate::factory::customer::create_customer(db).await?;
    let technician = crate::factory::technician::create_technician(db).await?;
    let task = crate::factory::deployment_task::DeploymentTaskFactory::new(db)
        .customer_id(customer.customer_id)
        .technician_id(technician.technician_id)
        .build()
        .await?;

    Ok((customer, technician, task))
}
