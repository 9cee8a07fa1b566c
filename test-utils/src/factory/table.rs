//! Factories for restaurant tables and table groups.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating restaurant tables.
///
/// The default table number is drawn from the shared counter so several tables
/// can be created for the same company without colliding.
pub struct TableFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    branch_id: Option<i32>,
    table_number: i32,
    group_id: Option<i32>,
    is_active: bool,
}

impl<'a> TableFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        Self {
            db,
            company_id,
            branch_id: None,
            table_number: next_id() as i32,
            group_id: None,
            is_active: true,
        }
    }

    pub fn table_number(mut self, table_number: i32) -> Self {
        self.table_number = table_number;
        self
    }

    pub fn branch_id(mut self, branch_id: Option<i32>) -> Self {
        self.branch_id = branch_id;
        self
    }

    pub fn group_id(mut self, group_id: Option<i32>) -> Self {
        self.group_id = group_id;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub async fn build(self) -> Result<entity::restaurant_table::Model, DbErr> {
        entity::restaurant_table::ActiveModel {
            id: ActiveValue::NotSet,
            company_id: ActiveValue::Set(Some(self.company_id)),
            branch_id: ActiveValue::Set(self.branch_id),
            table_number: ActiveValue::Set(self.table_number),
            table_name: ActiveValue::Set(None),
            qr_code_data: ActiveValue::Set(format!("table-{}", self.table_number)),
            group_id: ActiveValue::Set(self.group_id),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active table for the company.
pub async fn create_table(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::restaurant_table::Model, DbErr> {
    TableFactory::new(db, company_id).build().await
}

/// Creates a table group named `"Group {id}"` for the company.
pub async fn create_table_group(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::table_group::Model, DbErr> {
    entity::table_group::ActiveModel {
        id: ActiveValue::NotSet,
        company_id: ActiveValue::Set(Some(company_id)),
        name: ActiveValue::Set(format!("Group {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
