use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{ingredient::IngredientRepository, menu_item::MenuItemRepository},
    error::AppError,
    model::{
        menu::{MenuItemParams, RecipeParams},
        tenant::Scope,
    },
};

const ITEM_NOT_FOUND: &str = "Menu item not found or access denied";

pub struct MenuService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MenuService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the tenant's menu. Without a tenant the menu is empty.
    pub async fn get_all(
        &self,
        scope: Option<Scope>,
    ) -> Result<Vec<entity::menu_item::Model>, AppError> {
        let Some(scope) = scope else {
            return Ok(Vec::new());
        };

        Ok(MenuItemRepository::new(self.db).get_all(scope).await?)
    }

    /// Single menu item; any item outside the scope reads as not found.
    pub async fn get_by_id(
        &self,
        scope: Option<Scope>,
        id: i32,
    ) -> Result<entity::menu_item::Model, AppError> {
        let not_found = || AppError::NotFound("Menu item not found".to_string());
        let scope = scope.ok_or_else(not_found)?;

        MenuItemRepository::new(self.db)
            .find(scope.company_id, id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn create(
        &self,
        scope: Scope,
        params: MenuItemParams,
    ) -> Result<entity::menu_item::Model, AppError> {
        Ok(MenuItemRepository::new(self.db)
            .create(scope, params)
            .await?)
    }

    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        params: MenuItemParams,
    ) -> Result<entity::menu_item::Model, AppError> {
        let repo = MenuItemRepository::new(self.db);

        let Some(item) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
        };

        Ok(repo.update(item, params).await?)
    }

    /// Deletes an item that no order references.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let repo = MenuItemRepository::new(self.db);

        let Some(item) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
        };
        if repo.is_ordered(item.id).await? {
            return Err(AppError::BadRequest(
                "Cannot delete menu item that has been ordered".to_string(),
            ));
        }

        repo.delete(company_id, item.id).await?;

        Ok(())
    }

    /// Recipe lines of a menu item.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Ingredient lines, possibly empty
    /// - `Err(AppError::NotFound)` - No such menu item in the company
    pub async fn get_recipe(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Vec<entity::recipe_item::Model>, AppError> {
        let repo = MenuItemRepository::new(self.db);

        let Some(item) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
        };

        Ok(repo.get_recipe(item.id).await?)
    }

    /// Replaces the recipe of an item in one transaction.
    ///
    /// # Returns
    /// - `Ok(Vec<recipe_item::Model>)` - The new recipe lines
    /// - `Err(AppError::NotFound)` - Unknown item, or an ingredient outside the tenant
    pub async fn replace_recipe(
        &self,
        company_id: i32,
        id: i32,
        params: RecipeParams,
    ) -> Result<Vec<entity::recipe_item::Model>, AppError> {
        let txn = self.db.begin().await?;
        let repo = MenuItemRepository::new(&txn);

        let Some(item) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
        };

        let mut ingredient_ids: Vec<i32> = params.lines.iter().map(|(id, _)| *id).collect();
        ingredient_ids.sort_unstable();
        ingredient_ids.dedup();
        let known = IngredientRepository::new(&txn)
            .find_many(company_id, &ingredient_ids)
            .await?;
        if known.len() != ingredient_ids.len() {
            return Err(AppError::NotFound("Ingredient not found".to_string()));
        }

        let lines = repo.replace_recipe(&item, &params.lines).await?;

        txn.commit().await?;

        Ok(lines)
    }
}
