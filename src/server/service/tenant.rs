//! Tenant resolution.
//!
//! A request may name its company in several ways at once: an explicit
//! `X-Company-Slug` header, the subdomain of its `Host`, or the `company_id` inside its
//! bearer token. Public routes trust the slug first; authenticated routes trust the
//! token. Branch scope comes from `X-Branch-Id`, else from the token.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{branch::BranchRepository, company::CompanyRepository},
    error::{tenant::TenantError, AppError},
    model::tenant::{TenantContext, TenantSource},
    service::token::Claims,
    util::{parse::parse_branch_header, slug::slug_from_host},
};

/// Raw tenancy signals read from a request.
#[derive(Debug, Clone, Default)]
pub struct TenantSignals {
    pub slug_header: Option<String>,
    pub host: Option<String>,
    pub branch_header: Option<String>,
    pub claims: Option<Claims>,
}

impl TenantSignals {
    fn slug_header(&self) -> Option<&str> {
        self.slug_header
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    fn branch_header(&self) -> Option<&str> {
        self.branch_header
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

pub struct TenantResolver<'a> {
    db: &'a DatabaseConnection,
    fallback_latest: bool,
}

impl<'a> TenantResolver<'a> {
    pub fn new(db: &'a DatabaseConnection, fallback_latest: bool) -> Self {
        Self {
            db,
            fallback_latest,
        }
    }

    /// Resolves the tenant of a public request, first match wins:
    /// slug header, host subdomain, token, then the latest company if enabled.
    ///
    /// # Returns
    /// - `Ok(Some(TenantContext))` - Resolved company and branch
    /// - `Ok(None)` - No signal named a company
    /// - `Err(TenantError::CompanyNotFound)` - A slug named an unknown company
    /// - `Err(TenantError::BranchNotFound)` - The branch header names a foreign branch
    pub async fn resolve_public(
        &self,
        signals: &TenantSignals,
    ) -> Result<Option<TenantContext>, AppError> {
        let company_repo = CompanyRepository::new(self.db);

        let slug = match signals.slug_header() {
            Some(slug) => Some((slug.to_string(), TenantSource::Header)),
            None => signals
                .host
                .as_deref()
                .and_then(slug_from_host)
                .map(|slug| (slug, TenantSource::Subdomain)),
        };

        let (company_id, source) = if let Some((slug, source)) = slug {
            let Some(company) = company_repo.find_by_slug(&slug).await? else {
                return Err(TenantError::CompanyNotFound(slug).into());
            };
            if let Some(token_company) = signals.claims.as_ref().and_then(|c| c.company_id) {
                if token_company != company.id {
                    tracing::debug!(
                        "Slug '{}' resolves to company {} but token names {}; using slug",
                        slug,
                        company.id,
                        token_company
                    );
                }
            }
            (company.id, source)
        } else if let Some(company_id) = signals.claims.as_ref().and_then(|c| c.company_id) {
            (company_id, TenantSource::Token)
        } else if self.fallback_latest {
            let Some(company) = company_repo.find_latest().await? else {
                return Ok(None);
            };
            tracing::warn!(
                "No tenant signal on request, falling back to latest company {}",
                company.id
            );
            (company.id, TenantSource::Fallback)
        } else {
            return Ok(None);
        };

        let branch_id = self.resolve_branch(company_id, signals).await?;

        Ok(Some(TenantContext {
            company_id,
            branch_id,
            source,
        }))
    }

    /// Resolves the tenant of an authenticated request from its token.
    ///
    /// # Returns
    /// - `Ok(TenantContext)` - The token's company, branch from header or token
    /// - `Err(TenantError::MissingCompanyContext)` - The token carries no company
    pub async fn resolve_authenticated(
        &self,
        claims: &Claims,
        signals: &TenantSignals,
    ) -> Result<TenantContext, AppError> {
        let Some(company_id) = claims.company_id else {
            return Err(TenantError::MissingCompanyContext.into());
        };

        if let Some(slug) = signals.slug_header() {
            let company = CompanyRepository::new(self.db).find_by_slug(slug).await?;
            if company.is_some_and(|c| c.id != company_id) {
                tracing::debug!(
                    "Slug '{}' disagrees with token company {}; using token",
                    slug,
                    company_id
                );
            }
        }

        let branch_id = self.resolve_branch(company_id, signals).await?;

        Ok(TenantContext {
            company_id,
            branch_id,
            source: TenantSource::Token,
        })
    }

    /// Branch from the header, checked against the company, else from a token of the
    /// same company.
    async fn resolve_branch(
        &self,
        company_id: i32,
        signals: &TenantSignals,
    ) -> Result<Option<i32>, AppError> {
        if let Some(raw) = signals.branch_header() {
            let branch_id = parse_branch_header(raw)?;
            let branch = BranchRepository::new(self.db)
                .find(company_id, branch_id)
                .await?;
            if branch.is_none() {
                return Err(TenantError::BranchNotFound(branch_id, company_id).into());
            }
            return Ok(Some(branch_id));
        }

        Ok(signals
            .claims
            .as_ref()
            .filter(|c| c.company_id == Some(company_id))
            .and_then(|c| c.branch_id))
    }
}
