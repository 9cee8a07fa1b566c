use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures while deriving the company and branch a request operates on.
#[derive(Error, Debug)]
pub enum TenantError {
    /// The slug from `X-Company-Slug` or the host subdomain matches no company.
    #[error("Company not found for slug '{0}'")]
    CompanyNotFound(String),

    /// An authenticated route was hit with a token lacking `company_id`.
    #[error("Company context missing. Please relogin.")]
    MissingCompanyContext,

    /// A public route that writes tenant data was hit without any tenant signal.
    #[error("Company context required to {0}")]
    CompanyRequired(String),

    /// `X-Branch-Id` is not an integer.
    #[error("Invalid X-Branch-Id header '{0}'")]
    InvalidBranchHeader(String),

    /// The requested branch does not exist or belongs to another company.
    #[error("Branch {0} not found for company {1}")]
    BranchNotFound(i32, i32),
}

/// Converts tenant errors into HTTP responses.
///
/// - `CompanyNotFound` → 404 "Company not found"
/// - `BranchNotFound` → 404 "Branch not found"
/// - everything else → 400 with the error's own message
impl IntoResponse for TenantError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match &self {
            Self::CompanyNotFound(_) => (StatusCode::NOT_FOUND, "Company not found".to_string()),
            Self::BranchNotFound(_, _) => (StatusCode::NOT_FOUND, "Branch not found".to_string()),
            Self::InvalidBranchHeader(_) => {
                (StatusCode::BAD_REQUEST, "Invalid branch id".to_string())
            }
            Self::MissingCompanyContext | Self::CompanyRequired(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
