use std::time::Duration;

use crate::server::{
    config::Config,
    data::menu_item::MenuItemRepository,
    error::AppError,
    service::schema::SchemaReconciler,
};

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then runs
/// all pending SeaORM migrations so the schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Repairs tenancy columns on databases created before they existed and removes
/// invalid menu rows.
///
/// Both steps only log on failure; the health check retries the reconcile.
pub async fn prepare_schema(db: &sea_orm::DatabaseConnection) {
    match SchemaReconciler::new(db).reconcile().await {
        Ok(report) if !report.is_noop() || !report.tolerated.is_empty() => {
            tracing::info!(
                "Schema reconciled: {} columns added, {} constraints added, {} tolerated",
                report.added_columns.len(),
                report.added_constraints.len(),
                report.tolerated.len()
            );
        }
        Ok(_) => {}
        Err(e) => tracing::error!("Schema reconcile failed, continuing startup: {}", e),
    }

    match MenuItemRepository::new(db).delete_invalid().await {
        Ok(0) => {}
        Ok(removed) => tracing::info!("Removed {} invalid menu rows", removed),
        Err(e) => tracing::warn!("Menu cleanup failed: {}", e),
    }
}

/// Builds the HTTP client used for outbound API calls.
///
/// Redirects are not followed and every request gives up after 30 seconds.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .timeout(HTTP_REQUEST_TIMEOUT)
        .build()?)
}
