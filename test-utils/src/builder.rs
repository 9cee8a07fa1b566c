use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured context.
/// Tables are created with `IF NOT EXISTS`, so the convenience groups below can be
/// combined freely even when they overlap.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_tenant_tables()
///     .with_order_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after their referenced
    /// tables, since SQLite enforces foreign keys on these connections.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create the table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut stmt = schema.create_table_from_entity(entity);
        stmt.if_not_exists();
        self.tables.push(stmt);
        self
    }

    /// Adds companies, branches, roles and users.
    pub fn with_tenant_tables(self) -> Self {
        self.with_table(Company)
            .with_table(Branch)
            .with_table(Role)
            .with_table(User)
    }

    /// Adds menu items together with the recipe tables they cascade into.
    pub fn with_menu_tables(self) -> Self {
        self.with_table(MenuItem)
            .with_table(Ingredient)
            .with_table(RecipeItem)
    }

    /// Adds every table touched by the order lifecycle.
    ///
    /// This convenience method adds, in dependency order:
    /// - TableGroup
    /// - RestaurantTable
    /// - MenuItem
    /// - Order
    /// - OrderItem
    /// - OrderCancellation
    /// - OrderFeedback
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_order_tables(self) -> Self {
        self.with_table(TableGroup)
            .with_table(RestaurantTable)
            .with_table(MenuItem)
            .with_table(Order)
            .with_table(OrderItem)
            .with_table(OrderCancellation)
            .with_table(OrderFeedback)
    }

    /// Adds ingredients, recipes and the waste log.
    pub fn with_inventory_tables(self) -> Self {
        self.with_menu_tables().with_table(WasteLog)
    }

    /// Adds every table of the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_tenant_tables()
            .with_order_tables()
            .with_inventory_tables()
            .with_table(Staff)
            .with_table(SupportTicket)
    }

    /// Builds and initializes the test context with configured tables.
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
