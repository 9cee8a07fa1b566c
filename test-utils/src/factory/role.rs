//! Role factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating custom roles with a permission list.
///
/// # Example
///
/// ```rust,ignore
/// let role = RoleFactory::new(&db, Some(company.id))
///     .permissions(&["orders", "menu"])
///     .build()
///     .await?;
/// ```
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: Option<i32>,
    name: String,
    permissions: Vec<String>,
}

impl<'a> RoleFactory<'a> {
    /// Defaults to a role named `"Role {id}"` with no permissions.
    pub fn new(db: &'a DatabaseConnection, company_id: Option<i32>) -> Self {
        Self {
            db,
            company_id,
            name: format!("Role {}", next_id()),
            permissions: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn permissions(mut self, permissions: &[&str]) -> Self {
        self.permissions = permissions.iter().map(|p| p.to_string()).collect();
        self
    }

    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        let permissions = format!(
            "[{}]",
            self.permissions
                .iter()
                .map(|p| format!("\"{}\"", p))
                .collect::<Vec<_>>()
                .join(",")
        );

        entity::role::ActiveModel {
            id: ActiveValue::NotSet,
            company_id: ActiveValue::Set(self.company_id),
            name: ActiveValue::Set(self.name),
            permissions: ActiveValue::Set(permissions),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role granting the given permissions.
pub async fn create_role(
    db: &DatabaseConnection,
    company_id: i32,
    permissions: &[&str],
) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db, Some(company_id))
        .permissions(permissions)
        .build()
        .await
}
