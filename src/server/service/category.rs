//! Menu categories.
//!
//! Categories have no table of their own: a category exists while a menu item uses it.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::menu_item::MenuItemRepository,
    error::AppError,
    model::{menu::validate_category, tenant::Scope},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sorted listable categories of the tenant, empty without one.
    pub async fn get_all(&self, scope: Option<Scope>) -> Result<Vec<String>, AppError> {
        let Some(scope) = scope else {
            return Ok(Vec::new());
        };

        Ok(MenuItemRepository::new(self.db)
            .get_categories(scope)
            .await?)
    }

    /// Validates a new category name. Nothing is stored until an item uses it.
    ///
    /// # Returns
    /// - `Ok(String)` - Trimmed name
    /// - `Err(AppError::BadRequest)` - Empty, `add-new`, or already used
    pub async fn create(&self, company_id: i32, name: Option<String>) -> Result<String, AppError> {
        let name = name.map(|n| n.trim().to_string()).unwrap_or_default();
        if name.is_empty() {
            return Err(AppError::BadRequest("Category name is required".to_string()));
        }
        let name = validate_category(Some(&name))?;

        let in_use = MenuItemRepository::new(self.db)
            .count_in_category(company_id, &name)
            .await?;
        if in_use > 0 {
            return Err(AppError::BadRequest("Category already exists".to_string()));
        }

        Ok(name)
    }

    /// Removes a category no real item uses, along with leftover placeholder rows.
    pub async fn delete(&self, company_id: i32, name: &str) -> Result<(), AppError> {
        let repo = MenuItemRepository::new(self.db);
        let name = name.trim();

        let in_use = repo.count_in_category(company_id, name).await?;
        if in_use > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete category. {} item(s) are using this category.",
                in_use
            )));
        }

        let removed = repo.delete_category_placeholders(company_id, name).await?;
        tracing::debug!("Deleted category '{}' ({} placeholder rows)", name, removed);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::EntityTrait;
    use test_utils::{
        builder::TestBuilder,
        factory::{self, menu_item::MenuItemFactory},
    };

    use super::*;
    use crate::server::model::menu::CATEGORY_PLACEHOLDER;

    /// Expected: Err(BadRequest) for blank, `add-new` and taken names; trimmed name otherwise
    #[tokio::test]
    async fn create_validates_name() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_menu_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        MenuItemFactory::new(db, company.id)
            .category(Some("Starters"))
            .build()
            .await?;
        let service = CategoryService::new(db);

        for name in [None, Some("   "), Some("add-new"), Some("Starters")] {
            let result = service.create(company.id, name.map(String::from)).await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        let created = service
            .create(company.id, Some("  Desserts ".to_string()))
            .await?;
        assert_eq!(created, "Desserts");

        let other = factory::create_company(db).await?;
        let elsewhere = service
            .create(other.id, Some("Starters".to_string()))
            .await?;
        assert_eq!(elsewhere, "Starters");

        Ok(())
    }

    /// Expected: Err(BadRequest) while an item uses it; placeholders removed once free
    #[tokio::test]
    async fn delete_refuses_used_category() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_menu_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        let item = MenuItemFactory::new(db, company.id)
            .category(Some("Mains"))
            .build()
            .await?;
        MenuItemFactory::new(db, company.id)
            .name(CATEGORY_PLACEHOLDER)
            .category(Some("Drinks"))
            .build()
            .await?;
        let service = CategoryService::new(db);

        let used = service.delete(company.id, "Mains").await;
        match used {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("1 item(s)")),
            other => panic!("Expected BadRequest, got: {:?}", other),
        }

        service.delete(company.id, " Drinks ").await?;

        let remaining = entity::prelude::MenuItem::find().all(db).await?;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, item.id);

        Ok(())
    }
}
