//! Small pure helpers shared by controllers, middleware and services.

pub mod money;
pub mod origin;
pub mod parse;
pub mod slug;
