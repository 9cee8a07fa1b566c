//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Tenant-scoped
//! factories take the owning `company_id` up front, so tests make the scoping explicit.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let company = factory::create_company(&db).await?;
//! let item = factory::create_menu_item(&db, company.id).await?;
//!
//! let (company, admin) = factory::helpers::create_company_with_admin(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let item = factory::menu_item::MenuItemFactory::new(&db, company.id)
//!     .name("Paneer Tikka")
//!     .price(250.0, 3.0)
//!     .category(Some("Starters"))
//!     .build()
//!     .await?;
//! ```

pub mod branch;
pub mod company;
pub mod helpers;
pub mod ingredient;
pub mod menu_item;
pub mod order;
pub mod role;
pub mod staff;
pub mod support_ticket;
pub mod table;
pub mod user;

pub use branch::create_branch;
pub use company::create_company;
pub use ingredient::create_ingredient;
pub use menu_item::create_menu_item;
pub use order::{create_order, create_order_item};
pub use role::create_role;
pub use staff::create_staff;
pub use support_ticket::create_ticket;
pub use table::{create_table, create_table_group};
pub use user::create_user;
