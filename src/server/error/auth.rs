use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header (or `token` query parameter) on a protected route.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication token missing")]
    MissingToken,

    /// The bearer token failed signature or expiry validation.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    /// Email unknown or password mismatch during login.
    ///
    /// Both cases share one message so callers cannot tell which emails are registered.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Token is valid but its user no longer exists.
    #[error("User {0} not found in database")]
    UserNotInDatabase(i32),

    /// User lacks the permission required by the endpoint.
    ///
    /// # Fields
    /// - User id
    /// - Description of the denied action, logged server-side
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` → 401 "Authentication required"
/// - `InvalidToken` / `UserNotInDatabase` → 403 "Invalid or expired token"
/// - `InvalidCredentials` → 401 "Invalid email or password"
/// - `AccessDenied` → 403 "Access denied"
///
/// Details are logged at debug level; client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Authentication required"),
            Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::FORBIDDEN, "Invalid or expired token")
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, "Invalid email or password"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
        };

        (status, Json(ErrorDto::new(message))).into_response()
    }
}
