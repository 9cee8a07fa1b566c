//! SeaORM entity definitions for the restaurant schema.
//!
//! Every business table carries a nullable `company_id` (the tenant) and, where a table
//! is partitioned per location, a nullable `branch_id`. Rows with a NULL `branch_id`
//! are company-wide.

pub mod prelude;

pub mod branch;
pub mod company;
pub mod ingredient;
pub mod menu_item;
pub mod order;
pub mod order_cancellation;
pub mod order_feedback;
pub mod order_item;
pub mod recipe_item;
pub mod restaurant_table;
pub mod role;
pub mod staff;
pub mod support_ticket;
pub mod table_group;
pub mod user;
pub mod waste_log;
