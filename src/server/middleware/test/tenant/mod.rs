use chrono::Duration;

use crate::server::{
    error::{tenant::TenantError, AppError},
    model::tenant::TenantSource,
    service::{
        tenant::{TenantResolver, TenantSignals},
        token::Claims,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod resolve_authenticated;
mod resolve_public;

fn claims(company_id: Option<i32>, branch_id: Option<i32>) -> Claims {
    Claims {
        id: 1,
        email: "staff@example.com".to_string(),
        role: "staff".to_string(),
        company_id,
        branch_id,
        iat: 0,
        exp: Duration::days(1).num_seconds(),
    }
}
