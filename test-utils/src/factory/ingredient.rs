//! Ingredient factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating stock ingredients.
pub struct IngredientFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    name: String,
    current_stock: f64,
    min_stock_level: f64,
    unit: String,
}

impl<'a> IngredientFactory<'a> {
    /// Defaults to 10 kg in stock with a minimum level of 2 kg.
    pub fn new(db: &'a DatabaseConnection, company_id: i32) -> Self {
        Self {
            db,
            company_id,
            name: format!("Ingredient {}", next_id()),
            current_stock: 10.0,
            min_stock_level: 2.0,
            unit: "kg".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn stock(mut self, current_stock: f64, min_stock_level: f64) -> Self {
        self.current_stock = current_stock;
        self.min_stock_level = min_stock_level;
        self
    }

    pub async fn build(self) -> Result<entity::ingredient::Model, DbErr> {
        let now = Utc::now();
        entity::ingredient::ActiveModel {
            id: ActiveValue::NotSet,
            company_id: ActiveValue::Set(Some(self.company_id)),
            branch_id: ActiveValue::Set(None),
            name: ActiveValue::Set(self.name),
            current_stock: ActiveValue::Set(self.current_stock),
            unit: ActiveValue::Set(self.unit),
            min_stock_level: ActiveValue::Set(self.min_stock_level),
            cost_per_unit: ActiveValue::Set(0.0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_ingredient(
    db: &DatabaseConnection,
    company_id: i32,
) -> Result<entity::ingredient::Model, DbErr> {
    IngredientFactory::new(db, company_id).build().await
}
