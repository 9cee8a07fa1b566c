//! DineFlow API server.
//!
//! Every business row belongs to a tenant company. Each request resolves its tenant (and
//! optionally a branch) before any data access, and repositories filter on that scope.
//! Axum serves the HTTP and WebSocket endpoints; SeaORM talks to Postgres or SQLite.
//!
//! # Layers
//!
//! - **Controller** (`controller/`) - Extract caller and tenant, check permissions, map DTOs
//! - **Service** (`service/`) - Business rules, transactions, event publishing
//! - **Data** (`data/`) - Tenant-scoped SeaORM repositories
//! - **Model** (`model/`) - Validated params and domain enums
//! - **Error** (`error/`) - `AppError` and its JSON envelope
//! - **Middleware** (`middleware/`) - Bearer auth, permission guard, tenant extractors
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment variables
//! - **State** (`state`) - Pool, HTTP client, notifier, mailer, token keys
//! - **Startup** (`startup`) - Database connection, migrations, schema repair
//! - **Router** (`router`) - Routes, CORS, rate limiting, OpenAPI document
//! - **Scheduler** (`scheduler/`) - Hourly maintenance job
//!
//! # Request Flow
//!
//! 1. **Router** matches the route; CORS, trace and cache headers wrap every response
//! 2. **Middleware** extractors verify the bearer token and resolve the tenant
//! 3. **Controller** checks permissions and converts the payload to params
//! 4. **Service** applies the rules, opening a transaction where several rows change
//! 5. **Data** runs the scoped queries
//! 6. **Controller** wraps the result in `DataDto` or `MessageDto`

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
