use chrono::{DateTime, NaiveDate, Utc};

use crate::server::error::{tenant::TenantError, AppError};

/// Parses the `X-Branch-Id` header value.
///
/// # Returns
/// - `Ok(i32)` - Branch id
/// - `Err(TenantError::InvalidBranchHeader)` - Value is not an integer
pub fn parse_branch_header(value: &str) -> Result<i32, TenantError> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| TenantError::InvalidBranchHeader(value.to_string()))
}

/// Parses a date filter bound from a query string.
///
/// Accepts an RFC 3339 timestamp or a plain `YYYY-MM-DD` day. A plain day used as an
/// upper bound (`end_of_day = true`) covers the whole day.
///
/// # Arguments
/// - `field` - Query parameter name, used in the error message
/// - `value` - Raw query value
/// - `end_of_day` - Whether a plain day should resolve to its last instant
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - Parsed bound
/// - `Err(AppError::BadRequest)` - Value matches neither format
pub fn parse_date_bound(
    field: &str,
    value: &str,
    end_of_day: bool,
) -> Result<DateTime<Utc>, AppError> {
    let value = value.trim();

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.with_timezone(&Utc));
    }

    let day = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("Invalid {}: {}", field, value)))?;

    let time = if end_of_day {
        day.and_hms_milli_opt(23, 59, 59, 999)
    } else {
        day.and_hms_opt(0, 0, 0)
    };

    time.map(|t| t.and_utc())
        .ok_or_else(|| AppError::BadRequest(format!("Invalid {}: {}", field, value)))
}
