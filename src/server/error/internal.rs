use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Password hashing or verification failed inside bcrypt.
    #[error("Failed to hash password: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Signing a JWT failed.
    #[error("Failed to issue token: {0}")]
    TokenIssue(#[from] jsonwebtoken::errors::Error),

    /// A role row holds a permissions column that is not a JSON string array.
    #[error("Role {role_id} has malformed permissions: {source}")]
    MalformedPermissions {
        /// The role whose permissions failed to parse
        role_id: i32,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a realtime event payload failed.
    #[error("Failed to serialize event payload: {0}")]
    EventPayload(#[source] serde_json::Error),
}
