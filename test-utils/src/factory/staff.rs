//! Staff factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active staff member named `"Staff {id}"`.
pub async fn create_staff(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::staff::Model, DbErr> {
    entity::staff::ActiveModel {
        id: ActiveValue::NotSet,
        company_id: ActiveValue::Set(Some(company_id)),
        branch_id: ActiveValue::Set(None),
        name: ActiveValue::Set(format!("Staff {}", next_id())),
        role: ActiveValue::Set(Some("waiter".to_string())),
        phone: ActiveValue::Set(None),
        email: ActiveValue::Set(None),
        is_active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
