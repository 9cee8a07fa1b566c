//! Domain models and operation-specific parameter types.
//!
//! Parameter structs validate and normalize incoming DTOs before they reach the service
//! layer; `From` impls convert entity models into response DTOs at the boundary.

pub mod auth;
pub mod branch;
pub mod inventory;
pub mod menu;
pub mod order;
pub mod role;
pub mod staff;
pub mod support;
pub mod table;
pub mod tenant;
pub mod user;
