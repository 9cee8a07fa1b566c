//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Every tenant-scoped repository method takes the company id
//! (or a `Scope`) as a required argument, so no query can forget the tenant filter.
//!
//! Repositories are generic over `ConnectionTrait`: services hand them either the pooled
//! `DatabaseConnection` or an open `DatabaseTransaction`.

pub mod branch;
pub mod company;
pub mod feedback;
pub mod ingredient;
pub mod menu_item;
pub mod order;
pub mod role;
pub mod staff;
pub mod support_ticket;
pub mod table;
pub mod table_group;
pub mod user;

#[cfg(test)]
mod test;
