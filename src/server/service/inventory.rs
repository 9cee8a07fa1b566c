//! Ingredient stock and waste.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::ingredient::IngredientRepository,
    error::AppError,
    model::{
        inventory::{IngredientParams, WasteParams},
        tenant::Scope,
    },
};

const INGREDIENT_NOT_FOUND: &str = "Ingredient not found";

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, scope: Scope) -> Result<Vec<entity::ingredient::Model>, AppError> {
        Ok(IngredientRepository::new(self.db).get_all(scope).await?)
    }

    /// Ingredients at or below their minimum stock level.
    pub async fn get_low_stock(
        &self,
        scope: Scope,
    ) -> Result<Vec<entity::ingredient::Model>, AppError> {
        Ok(IngredientRepository::new(self.db)
            .get_low_stock(scope)
            .await?)
    }

    pub async fn create(
        &self,
        scope: Scope,
        params: IngredientParams,
    ) -> Result<entity::ingredient::Model, AppError> {
        Ok(IngredientRepository::new(self.db)
            .create(scope, params)
            .await?)
    }

    /// Updates an ingredient of the company.
    ///
    /// # Returns
    /// - `Ok(Model)` - Updated ingredient
    /// - `Err(AppError::NotFound)` - No such ingredient in the company
    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        params: IngredientParams,
    ) -> Result<entity::ingredient::Model, AppError> {
        let repo = IngredientRepository::new(self.db);

        let Some(ingredient) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(INGREDIENT_NOT_FOUND.to_string()));
        };

        Ok(repo.update(ingredient, params).await?)
    }

    /// Deletes an ingredient with its recipe lines and waste history.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if !IngredientRepository::new(&txn)
            .delete_cascade(company_id, id)
            .await?
        {
            return Err(AppError::NotFound(INGREDIENT_NOT_FOUND.to_string()));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Logs waste and lowers the stock accordingly.
    ///
    /// # Returns
    /// - `Ok((waste_log::Model, ingredient::Model))` - Log entry and updated ingredient
    /// - `Err(AppError::NotFound)` - Unknown or foreign ingredient
    pub async fn record_waste(
        &self,
        company_id: i32,
        id: i32,
        params: WasteParams,
    ) -> Result<(entity::waste_log::Model, entity::ingredient::Model), AppError> {
        let txn = self.db.begin().await?;
        let repo = IngredientRepository::new(&txn);

        let Some(ingredient) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(INGREDIENT_NOT_FOUND.to_string()));
        };
        let recorded = repo.record_waste(ingredient, params).await?;

        txn.commit().await?;

        Ok(recorded)
    }
}
