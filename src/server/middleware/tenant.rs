//! Tenant extractors for public and authenticated routes.

use axum::{
    extract::FromRequestParts,
    http::{header::HOST, request::Parts, HeaderMap},
};

use crate::server::{
    error::AppError,
    middleware::auth::{AuthUser, OptionalAuthUser},
    model::tenant::TenantContext,
    service::{
        tenant::{TenantResolver, TenantSignals},
        token::Claims,
    },
    state::AppState,
};

pub const COMPANY_SLUG_HEADER: &str = "x-company-slug";
pub const BRANCH_ID_HEADER: &str = "x-branch-id";

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Reads the tenancy headers of a request.
pub fn signals_from_headers(headers: &HeaderMap, claims: Option<Claims>) -> TenantSignals {
    TenantSignals {
        slug_header: header_value(headers, COMPANY_SLUG_HEADER),
        host: header_value(headers, HOST.as_str()),
        branch_header: header_value(headers, BRANCH_ID_HEADER),
        claims,
    }
}

/// Tenant of a public request, if any signal names one.
#[derive(Debug, Clone)]
pub struct PublicTenant(pub Option<TenantContext>);

impl FromRequestParts<AppState> for PublicTenant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let OptionalAuthUser(claims) = OptionalAuthUser::from_request_parts(parts, state).await?;
        let signals = signals_from_headers(&parts.headers, claims);

        let tenant = TenantResolver::new(&state.db, state.config.tenant_fallback_latest)
            .resolve_public(&signals)
            .await?;

        Ok(Self(tenant))
    }
}

/// Authenticated caller together with the tenant taken from their token.
#[derive(Debug, Clone)]
pub struct AuthTenant {
    pub claims: Claims,
    pub tenant: TenantContext,
}

impl FromRequestParts<AppState> for AuthTenant {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let AuthUser(claims) = AuthUser::from_request_parts(parts, state).await?;
        let signals = signals_from_headers(&parts.headers, Some(claims.clone()));

        let tenant = TenantResolver::new(&state.db, state.config.tenant_fallback_latest)
            .resolve_authenticated(&claims, &signals)
            .await?;

        Ok(Self { claims, tenant })
    }
}
