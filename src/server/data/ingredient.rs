use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, ExprTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    inventory::{IngredientParams, WasteParams},
    tenant::{branch_filter, Scope},
};

/// Repository for ingredients and their waste log.
pub struct IngredientRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> IngredientRepository<'a, C> {
    /// Creates a new IngredientRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `IngredientRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the scope's ingredients ordered by name.
    ///
    /// # Arguments
    /// - `scope` - Company, and branch when the request is branch-scoped
    ///
    /// # Returns
    /// - `Ok(Vec<ingredient::Model>)` - Ingredients, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, scope: Scope) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::CompanyId.eq(scope.company_id))
            .filter(branch_filter(
                entity::ingredient::Column::BranchId,
                scope.branch_id,
            ))
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await
    }

    /// Ingredients whose stock is at or below their threshold.
    pub async fn get_low_stock(
        &self,
        scope: Scope,
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::CompanyId.eq(scope.company_id))
            .filter(branch_filter(
                entity::ingredient::Column::BranchId,
                scope.branch_id,
            ))
            .filter(
                Expr::col(entity::ingredient::Column::CurrentStock)
                    .lte(Expr::col(entity::ingredient::Column::MinStockLevel)),
            )
            .order_by_asc(entity::ingredient::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds an ingredient of the company, or `None` if unknown or foreign.
    pub async fn find(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Option<entity::ingredient::Model>, DbErr> {
        entity::prelude::Ingredient::find_by_id(id)
            .filter(entity::ingredient::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Ingredients among `ids` that belong to the company.
    pub async fn find_many(
        &self,
        company_id: i32,
        ids: &[i32],
    ) -> Result<Vec<entity::ingredient::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Ingredient::find()
            .filter(entity::ingredient::Column::CompanyId.eq(company_id))
            .filter(entity::ingredient::Column::Id.is_in(ids.to_vec()))
            .all(self.db)
            .await
    }

    /// Inserts an ingredient in the scope.
    ///
    /// # Arguments
    /// - `scope` - Company and optional branch stamped on the row
    /// - `params` - Validated ingredient fields
    ///
    /// # Returns
    /// - `Ok(ingredient::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        scope: Scope,
        params: IngredientParams,
    ) -> Result<entity::ingredient::Model, DbErr> {
        let now = Utc::now();

        entity::ingredient::ActiveModel {
            company_id: ActiveValue::Set(Some(scope.company_id)),
            branch_id: ActiveValue::Set(scope.branch_id),
            name: ActiveValue::Set(params.name),
            current_stock: ActiveValue::Set(params.current_stock),
            unit: ActiveValue::Set(params.unit),
            min_stock_level: ActiveValue::Set(params.min_stock_level),
            cost_per_unit: ActiveValue::Set(params.cost_per_unit),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the ingredient's editable fields and bumps `updated_at`.
    pub async fn update(
        &self,
        ingredient: entity::ingredient::Model,
        params: IngredientParams,
    ) -> Result<entity::ingredient::Model, DbErr> {
        let mut active: entity::ingredient::ActiveModel = ingredient.into();
        active.name = ActiveValue::Set(params.name);
        active.current_stock = ActiveValue::Set(params.current_stock);
        active.unit = ActiveValue::Set(params.unit);
        active.min_stock_level = ActiveValue::Set(params.min_stock_level);
        active.cost_per_unit = ActiveValue::Set(params.cost_per_unit);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes recipe lines, then waste entries, then the ingredient itself.
    ///
    /// Run inside a transaction. Returns whether the ingredient existed.
    pub async fn delete_cascade(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        entity::prelude::RecipeItem::delete_many()
            .filter(entity::recipe_item::Column::IngredientId.eq(id))
            .exec(self.db)
            .await?;
        entity::prelude::WasteLog::delete_many()
            .filter(entity::waste_log::Column::IngredientId.eq(id))
            .exec(self.db)
            .await?;
        let result = entity::prelude::Ingredient::delete_many()
            .filter(entity::ingredient::Column::Id.eq(id))
            .filter(entity::ingredient::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Logs waste and decrements stock, never below zero. Run inside a transaction.
    ///
    /// The decrement is a single `UPDATE` on the stored value, so concurrent waste posts
    /// against the same ingredient all count.
    ///
    /// # Arguments
    /// - `ingredient` - Row the waste is booked against
    /// - `params` - Wasted quantity and optional reason
    ///
    /// # Returns
    /// - `Ok((waste_log::Model, ingredient::Model))` - Log entry and the re-read ingredient
    /// - `Err(DbErr::RecordNotFound)` - Ingredient vanished before the update
    pub async fn record_waste(
        &self,
        ingredient: entity::ingredient::Model,
        params: WasteParams,
    ) -> Result<(entity::waste_log::Model, entity::ingredient::Model), DbErr> {
        let waste = entity::waste_log::ActiveModel {
            company_id: ActiveValue::Set(ingredient.company_id),
            ingredient_id: ActiveValue::Set(ingredient.id),
            quantity: ActiveValue::Set(params.quantity),
            reason: ActiveValue::Set(params.reason),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::prelude::Ingredient::update_many()
            .filter(entity::ingredient::Column::Id.eq(ingredient.id))
            .col_expr(
                entity::ingredient::Column::CurrentStock,
                Expr::cust_with_values(
                    "CASE WHEN current_stock > ? THEN current_stock - ? ELSE 0 END",
                    [params.quantity, params.quantity],
                ),
            )
            .col_expr(
                entity::ingredient::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        let ingredient = entity::prelude::Ingredient::find_by_id(ingredient.id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("ingredient {}", ingredient.id)))?;

        Ok((waste, ingredient))
    }
}
