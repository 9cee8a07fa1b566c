use crate::server::{
    data::order::OrderRepository,
    model::{
        order::{CreateOrderParams, OrderFilter, OrderLine, OrderStatus},
        tenant::Scope,
    },
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_filtered;
mod recompute_totals;
