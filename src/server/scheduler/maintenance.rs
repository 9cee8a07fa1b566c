use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::{menu_item::MenuItemRepository, user::UserRepository},
    error::AppError,
};

/// Starts the hourly maintenance scheduler.
///
/// Each run clears expired password reset tokens and removes invalid placeholder
/// menu rows.
///
/// # Arguments
/// - `db`: Database connection
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler; dropping it does not stop the jobs
/// - `Err(AppError)` - Failed to create or start the scheduler
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();

        Box::pin(async move {
            if let Err(e) = run_maintenance(&db).await {
                tracing::error!("Error running maintenance: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Maintenance scheduler started");

    Ok(scheduler)
}

/// Runs one maintenance pass.
///
/// # Returns
/// - `Ok((u64, u64))` - Reset tokens cleared and menu rows removed
pub async fn run_maintenance(db: &DatabaseConnection) -> Result<(u64, u64), AppError> {
    let cleared = UserRepository::new(db)
        .clear_expired_reset_tokens(Utc::now())
        .await?;
    let removed = MenuItemRepository::new(db).delete_invalid().await?;

    if cleared > 0 || removed > 0 {
        tracing::info!(
            "Maintenance cleared {} expired reset tokens and {} invalid menu rows",
            cleared,
            removed
        );
    }

    Ok((cleared, removed))
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use sea_orm::EntityTrait;
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Expected: Ok((1, 1)) with the valid item kept
    #[tokio::test]
    async fn clears_tokens_and_invalid_rows() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_menu_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        let user = factory::create_user(db).await?;
        UserRepository::new(db)
            .set_reset_token(user.id, "stale".to_string(), Utc::now() - Duration::hours(1))
            .await?;
        let kept = factory::create_menu_item(db, company.id).await?;
        factory::menu_item::MenuItemFactory::new(db, company.id)
            .category(Some("add-new"))
            .build()
            .await?;

        let result = run_maintenance(db).await?;

        assert_eq!(result, (1, 1));
        let remaining = entity::prelude::MenuItem::find().all(db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, kept.id);

        Ok(())
    }
}
