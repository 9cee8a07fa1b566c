//! Menu item factory for creating test dishes.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating menu items with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let item = MenuItemFactory::new(&db, company.id)
///     .name("Masala Dosa")
///     .price(120.0, 1.5)
///     .category(Some("Breakfast"))
///     .build()
///     .await?;
/// ```
pub struct MenuItemFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: Option<i32>,
    branch_id: Option<i32>,
    name: String,
    price_inr: f64,
    price_usd: f64,
    category: Option<String>,
    is_available: bool,
}

impl<'a> MenuItemFactory<'a> {
    /// Creates a new MenuItemFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dish {id}"`
    /// - price: 100.00 INR / 1.20 USD
    /// - category: `Some("Mains")`
    /// - available, company-wide (no branch)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `company_id` - Owning company
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        Self {
            db,
            company_id: Some(company_id),
            branch_id: None,
            name: format!("Dish {}", next_id()),
            price_inr: 100.0,
            price_usd: 1.2,
            category: Some("Mains".to_string()),
            is_available: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn price(mut self, price_inr: f64, price_usd: f64) -> Self {
        self.price_inr = price_inr;
        self.price_usd = price_usd;
        self
    }

    pub fn category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_string);
        self
    }

    pub fn branch_id(mut self, branch_id: Option<i32>) -> Self {
        self.branch_id = branch_id;
        self
    }

    pub fn is_available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Builds and inserts the menu item into the database.
    ///
    /// # Returns
    /// - `Ok(entity::menu_item::Model)` - Created menu item
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            id: ActiveValue::NotSet,
            company_id: ActiveValue::Set(self.company_id),
            branch_id: ActiveValue::Set(self.branch_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            price_inr: ActiveValue::Set(self.price_inr),
            price_usd: ActiveValue::Set(self.price_usd),
            category: ActiveValue::Set(self.category),
            image_url: ActiveValue::Set(None),
            is_available: ActiveValue::Set(self.is_available),
            nutritional_info: ActiveValue::Set(None),
            vitamins: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available menu item with default values.
pub async fn create_menu_item(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::menu_item::Model, DbErr> {
    MenuItemFactory::new(db, company_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_menu_item_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(MenuItem).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let item = MenuItemFactory::new(db, 7)
            .name("Masala Dosa")
            .price(120.0, 1.5)
            .category(None)
            .is_available(false)
            .build()
            .await?;

        assert_eq!(item.company_id, Some(7));
        assert_eq!(item.name, "Masala Dosa");
        assert_eq!(item.price_inr, 120.0);
        assert!(item.category.is_none());
        assert!(!item.is_available);

        Ok(())
    }
}
