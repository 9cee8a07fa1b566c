//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into every handler through Axum's
//! state extraction. It holds:
//! - Database connection pool
//! - HTTP client for the Gemini API
//! - Realtime order notifier
//! - SMTP email dispatcher
//! - Bearer token signer/verifier
//! - Loaded configuration

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{email::EmailDispatcher, notifier::Notifier, token::TokenService},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `reqwest::Client` uses an `Arc` internally
/// - `Notifier` clones share one broadcast channel
/// - `EmailDispatcher` clones share the SMTP transport pool
/// - `TokenService` holds only derived keys
/// - `Arc<Config>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for external API requests.
    ///
    /// Configured without redirects. Used for Gemini nutrition requests.
    pub http_client: reqwest::Client,

    /// Broadcasts order events to WebSocket subscribers.
    pub notifier: Notifier,

    /// Sends transactional mail, or logs it when SMTP is not configured.
    pub mailer: EmailDispatcher,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `mailer` - Email dispatcher built from the configuration
    /// - `config` - Loaded application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state with a fresh notifier
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        mailer: EmailDispatcher,
        config: Config,
    ) -> Self {
        let tokens = TokenService::new(&config.jwt_secret);

        Self {
            db,
            http_client,
            notifier: Notifier::default(),
            mailer,
            tokens,
            config: Arc::new(config),
        }
    }
}
