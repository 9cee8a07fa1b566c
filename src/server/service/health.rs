use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{model::health::HealthDto, server::service::schema::SchemaReconciler};

const HEALTHY_MESSAGE: &str = "Restaurant QR Ordering System API";

pub struct HealthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HealthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Pings the database and re-runs the schema reconciler.
    ///
    /// Only the ping decides health; a failed reconcile pass is logged and ignored.
    pub async fn check(&self) -> HealthDto {
        if let Err(e) = self.db.ping().await {
            tracing::error!("Health check database ping failed: {}", e);

            return HealthDto {
                status: "error".to_string(),
                message: "Database connection failed".to_string(),
                database: None,
                timestamp: Utc::now(),
            };
        }

        match SchemaReconciler::new(self.db).reconcile().await {
            Ok(report) if !report.is_noop() => {
                tracing::info!(
                    "Health check repaired schema: {} columns, {} constraints",
                    report.added_columns.len(),
                    report.added_constraints.len()
                );
            }
            Ok(_) => {}
            Err(e) => tracing::error!("Schema reconcile during health check failed: {}", e),
        }

        HealthDto {
            status: "ok".to_string(),
            message: HEALTHY_MESSAGE.to_string(),
            database: Some("connected".to_string()),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::builder::TestBuilder;

    use super::*;

    /// Expected: status "ok" with the API name and a connected database
    #[tokio::test]
    async fn healthy_database_reports_api_name() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let health = HealthService::new(db).check().await;

        assert_eq!(health.status, "ok");
        assert_eq!(health.message, "Restaurant QR Ordering System API");
        assert_eq!(health.database.as_deref(), Some("connected"));
    }
}
