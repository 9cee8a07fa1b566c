//! Branch factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating branches of an existing company.
pub struct BranchFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    name: String,
    is_active: bool,
}

impl<'a> BranchFactory<'a> {
    /// Defaults to an active branch named `"Branch {id}"`.
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        Self {
            db,
            company_id,
            name: format!("Branch {}", next_id()),
            is_active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::branch::Model, DbErr> {
        let now = Utc::now();
        entity::branch::ActiveModel {
            id: ActiveValue::NotSet,
            company_id: ActiveValue::Set(self.company_id),
            name: ActiveValue::Set(self.name),
            address: ActiveValue::Set(None),
            phone: ActiveValue::Set(None),
            manager_name: ActiveValue::Set(None),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active branch for the company.
pub async fn create_branch(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::branch::Model, DbErr> {
    BranchFactory::new(db, company_id).build().await
}
