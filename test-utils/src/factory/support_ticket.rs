//! Support ticket factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an open, medium priority ticket for the company.
///
/// # Arguments
/// - `db` - Database connection
/// - `company_id` - Company raising the ticket
/// - `created_by` - Optional id of the user who raised it
pub async fn create_ticket(
    db: &DatabaseConnection,
    company_id: i32,
    created_by: Option<i32>,
) -> Result<entity::support_ticket::Model, DbErr> {
    let now = Utc::now();
    entity::support_ticket::ActiveModel {
        id: ActiveValue::NotSet,
        company_id: ActiveValue::Set(company_id),
        created_by: ActiveValue::Set(created_by),
        subject: ActiveValue::Set(format!("Ticket {}", next_id())),
        description: ActiveValue::Set("Printer is offline".to_string()),
        priority: ActiveValue::Set("medium".to_string()),
        status: ActiveValue::Set("open".to_string()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
