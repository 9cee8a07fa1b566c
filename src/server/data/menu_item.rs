use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::{
    menu::{is_listable_category, MenuItemParams, ADD_NEW_CATEGORY, CATEGORY_PLACEHOLDER},
    tenant::{branch_filter, Scope},
};

pub struct MenuItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MenuItemRepository<'a, C> {
    /// Creates a new MenuItemRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `MenuItemRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Menu of the scope ordered by category, then name.
    pub async fn get_all(&self, scope: Scope) -> Result<Vec<entity::menu_item::Model>, DbErr> {
        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::CompanyId.eq(scope.company_id))
            .filter(branch_filter(entity::menu_item::Column::BranchId, scope.branch_id))
            .filter(entity::menu_item::Column::Name.ne(CATEGORY_PLACEHOLDER))
            .order_by_asc(entity::menu_item::Column::Category)
            .order_by_asc(entity::menu_item::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds an item of the company, or `None` if unknown or foreign.
    pub async fn find(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Option<entity::menu_item::Model>, DbErr> {
        entity::prelude::MenuItem::find_by_id(id)
            .filter(entity::menu_item::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Inserts a menu item in the scope.
    ///
    /// # Arguments
    /// - `scope` - Company and optional branch stamped on the row
    /// - `params` - Validated item fields
    ///
    /// # Returns
    /// - `Ok(menu_item::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        scope: Scope,
        params: MenuItemParams,
    ) -> Result<entity::menu_item::Model, DbErr> {
        entity::menu_item::ActiveModel {
            company_id: ActiveValue::Set(Some(scope.company_id)),
            branch_id: ActiveValue::Set(scope.branch_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price_inr: ActiveValue::Set(params.price_inr),
            price_usd: ActiveValue::Set(params.price_usd),
            category: ActiveValue::Set(Some(params.category)),
            image_url: ActiveValue::Set(params.image_url),
            is_available: ActiveValue::Set(params.is_available),
            nutritional_info: ActiveValue::Set(params.nutritional_info),
            vitamins: ActiveValue::Set(params.vitamins),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites every editable field of the item.
    pub async fn update(
        &self,
        item: entity::menu_item::Model,
        params: MenuItemParams,
    ) -> Result<entity::menu_item::Model, DbErr> {
        let mut active: entity::menu_item::ActiveModel = item.into();
        active.name = ActiveValue::Set(params.name);
        active.description = ActiveValue::Set(params.description);
        active.price_inr = ActiveValue::Set(params.price_inr);
        active.price_usd = ActiveValue::Set(params.price_usd);
        active.category = ActiveValue::Set(Some(params.category));
        active.image_url = ActiveValue::Set(params.image_url);
        active.is_available = ActiveValue::Set(params.is_available);
        active.nutritional_info = ActiveValue::Set(params.nutritional_info);
        active.vitamins = ActiveValue::Set(params.vitamins);

        active.update(self.db).await
    }

    /// Deletes the item if it belongs to the company. Returns whether a row was removed.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::MenuItem::delete_many()
            .filter(entity::menu_item::Column::Id.eq(id))
            .filter(entity::menu_item::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Whether any order line references the item.
    pub async fn is_ordered(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::MenuItemId.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Distinct listable categories of the scope, sorted.
    pub async fn get_categories(&self, scope: Scope) -> Result<Vec<String>, DbErr> {
        let rows: Vec<Option<String>> = entity::prelude::MenuItem::find()
            .select_only()
            .column(entity::menu_item::Column::Category)
            .distinct()
            .filter(entity::menu_item::Column::CompanyId.eq(scope.company_id))
            .filter(branch_filter(entity::menu_item::Column::BranchId, scope.branch_id))
            .filter(entity::menu_item::Column::Category.is_not_null())
            .into_tuple()
            .all(self.db)
            .await?;

        let mut categories: Vec<String> = rows
            .into_iter()
            .flatten()
            .map(|c| c.trim().to_string())
            .filter(|c| is_listable_category(c))
            .collect();
        categories.sort();
        categories.dedup();

        Ok(categories)
    }

    /// Number of real (non-placeholder) items of the company using `category`.
    pub async fn count_in_category(&self, company_id: i32, category: &str) -> Result<u64, DbErr> {
        entity::prelude::MenuItem::find()
            .filter(entity::menu_item::Column::CompanyId.eq(company_id))
            .filter(entity::menu_item::Column::Category.eq(category))
            .filter(entity::menu_item::Column::Name.ne(CATEGORY_PLACEHOLDER))
            .count(self.db)
            .await
    }

    /// Deletes placeholder rows that keep `category` alive for the company.
    pub async fn delete_category_placeholders(
        &self,
        company_id: i32,
        category: &str,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::MenuItem::delete_many()
            .filter(entity::menu_item::Column::CompanyId.eq(company_id))
            .filter(entity::menu_item::Column::Category.eq(category))
            .filter(entity::menu_item::Column::Name.eq(CATEGORY_PLACEHOLDER))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes placeholder rows and rows with an `add-new`, empty or missing category,
    /// across all companies.
    pub async fn delete_invalid(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::MenuItem::delete_many()
            .filter(
                Condition::any()
                    .add(entity::menu_item::Column::Name.eq(CATEGORY_PLACEHOLDER))
                    .add(entity::menu_item::Column::Category.is_in([ADD_NEW_CATEGORY, ""]))
                    .add(entity::menu_item::Column::Category.is_null()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Recipe lines of an item in insertion order.
    pub async fn get_recipe(
        &self,
        menu_item_id: i32,
    ) -> Result<Vec<entity::recipe_item::Model>, DbErr> {
        entity::prelude::RecipeItem::find()
            .filter(entity::recipe_item::Column::MenuItemId.eq(menu_item_id))
            .order_by_asc(entity::recipe_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every recipe line of the item. Run inside a transaction.
    pub async fn replace_recipe(
        &self,
        item: &entity::menu_item::Model,
        lines: &[(i32, f64)],
    ) -> Result<Vec<entity::recipe_item::Model>, DbErr> {
        entity::prelude::RecipeItem::delete_many()
            .filter(entity::recipe_item::Column::MenuItemId.eq(item.id))
            .exec(self.db)
            .await?;

        let mut created = Vec::with_capacity(lines.len());
        for (ingredient_id, quantity) in lines {
            let line = entity::recipe_item::ActiveModel {
                company_id: ActiveValue::Set(item.company_id),
                menu_item_id: ActiveValue::Set(item.id),
                ingredient_id: ActiveValue::Set(*ingredient_id),
                quantity: ActiveValue::Set(*quantity),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            created.push(line);
        }

        Ok(created)
    }
}
