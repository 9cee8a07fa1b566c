mod auth;
mod tenant;
