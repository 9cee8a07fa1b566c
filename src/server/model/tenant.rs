//! Tenant and branch scoping.

use sea_orm::{ColumnTrait, Condition};

/// Which request signal identified the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantSource {
    /// `X-Company-Slug` header
    Header,
    /// First label of the `Host` header
    Subdomain,
    /// `company_id` claim of the bearer token
    Token,
    /// Most recently created company, only when explicitly enabled
    Fallback,
}

/// Company and optional branch a request operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TenantContext {
    pub company_id: i32,
    pub branch_id: Option<i32>,
    pub source: TenantSource,
}

impl TenantContext {
    pub fn scope(&self) -> Scope {
        Scope {
            company_id: self.company_id,
            branch_id: self.branch_id,
        }
    }
}

/// The tenant filter every repository query is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub company_id: i32,
    pub branch_id: Option<i32>,
}

impl Scope {
    /// Company-wide scope without a branch.
    pub fn company(company_id: i32) -> Self {
        Self {
            company_id,
            branch_id: None,
        }
    }

    pub fn with_branch(company_id: i32, branch_id: Option<i32>) -> Self {
        Self {
            company_id,
            branch_id,
        }
    }
}

/// Restricts a query to one branch plus the company-wide rows (NULL `branch_id`).
///
/// Without a branch every row of the company matches.
pub fn branch_filter<C: ColumnTrait>(column: C, branch_id: Option<i32>) -> Condition {
    match branch_id {
        Some(branch_id) => Condition::any()
            .add(column.eq(branch_id))
            .add(column.is_null()),
        None => Condition::all(),
    }
}
