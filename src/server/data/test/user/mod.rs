use crate::server::data::user::UserRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod clear_expired_reset_tokens;
mod find_by_reset_token;
