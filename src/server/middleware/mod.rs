//! Request extractors for authentication, authorization and tenancy.

pub mod auth;
pub mod tenant;

#[cfg(test)]
mod test;
