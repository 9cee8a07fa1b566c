use crate::server::data::company::CompanyRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_slug;
mod find_latest;
