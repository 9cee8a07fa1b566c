//! Request and response DTOs exchanged over the REST API.
//!
//! Every payload the server accepts or returns is declared here with `serde` and
//! `utoipa::ToSchema`, so the OpenAPI document and the wire format stay in step.
//! Successful responses are wrapped in `DataDto`/`MessageDto`, failures in `ErrorDto`.

pub mod api;
pub mod auth;
pub mod branch;
pub mod category;
pub mod health;
pub mod ingredient;
pub mod menu;
pub mod nutrition;
pub mod order;
pub mod role;
pub mod staff;
pub mod support;
pub mod table;
pub mod user;
