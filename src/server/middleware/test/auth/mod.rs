use chrono::Duration;

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
    model::role::Resource,
    service::token::Claims,
};
use test_utils::{builder::TestBuilder, factory};

mod bearer;
mod require;

fn claims_for(user: &entity::user::Model) -> Claims {
    Claims::for_user(user, Duration::hours(1))
}
