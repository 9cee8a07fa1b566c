//! HTTP request handlers.
//!
//! Each handler extracts the caller and tenant, checks permissions through `AuthGuard`,
//! converts DTOs into validated params, calls one service, and wraps the result in a
//! response DTO.

pub mod auth;
pub mod branch;
pub mod category;
pub mod feedback;
pub mod health;
pub mod ingredient;
pub mod menu;
pub mod nutrition;
pub mod order;
pub mod role;
pub mod staff;
pub mod support;
pub mod table;
pub mod table_group;
pub mod user;
pub mod ws;
