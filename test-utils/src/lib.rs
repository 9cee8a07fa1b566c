//! Dineflow Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the dineflow
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories for tenant-scoped records.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting companies, users, menu items and orders
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::MenuItem;
//!
//! #[tokio::test]
//! async fn test_menu_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(MenuItem)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
