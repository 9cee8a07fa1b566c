//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a company and an admin user attached to it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((company, admin))` - Created company and its admin user
/// - `Err(DbErr)` - Database error during creation
pub async fn create_company_with_admin(
    db: &DatabaseConnection,
) -> Result<(entity::company::Model, entity::user::Model), DbErr> {
    let company = crate::factory::company::create_company(db).await?;
    let admin = crate::factory::user::UserFactory::new(db)
        .company_id(Some(company.id))
        .role("admin")
        .build()
        .await?;

    Ok((company, admin))
}

/// Creates a company with one restaurant table and one available menu item.
///
/// Covers the minimum a customer needs to place an order.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((company, table, menu_item))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_ordering_setup(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::company::Model,
        entity::restaurant_table::Model,
        entity::menu_item::Model,
    ),
    DbErr,
> {
    let company = crate::factory::company::create_company(db).await?;
    let table = crate::factory::table::create_table(db, company.id).await?;
    let item = crate::factory::menu_item::create_menu_item(db, company.id).await?;

    Ok((company, table, item))
}
