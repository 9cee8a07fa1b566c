use crate::server::{
    data::table::TableRepository,
    model::{
        table::{CreateTableParams, DEFAULT_GROUP_NAME},
        tenant::Scope,
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_active;
mod number_exists;
