//! Service layer between the controllers and the repositories.
//!
//! Services validate business rules, coordinate repositories inside transactions, and
//! talk to external systems (SMTP, Gemini, the realtime notifier).

pub mod auth;
pub mod branch;
pub mod category;
pub mod email;
pub mod feedback;
pub mod health;
pub mod inventory;
pub mod menu;
pub mod notifier;
pub mod nutrition;
pub mod order;
pub mod role;
pub mod schema;
pub mod staff;
pub mod support;
pub mod table;
pub mod tenant;
pub mod token;
pub mod user;
