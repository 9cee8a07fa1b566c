//! Branch data repository.
//!
//! Every query is scoped by `company_id`; branch rows never cross tenants.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::branch::BranchParams;

/// Repository providing database operations for branches.
pub struct BranchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BranchRepository<'a, C> {
    /// Creates a new BranchRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `BranchRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the company's branches ordered by name.
    ///
    /// # Arguments
    /// - `company_id` - Owning company
    ///
    /// # Returns
    /// - `Ok(Vec<branch::Model>)` - Branches, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, company_id: i32) -> Result<Vec<entity::branch::Model>, DbErr> {
        entity::prelude::Branch::find()
            .filter(entity::branch::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::branch::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a branch only if it belongs to the company.
    pub async fn find(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Option<entity::branch::Model>, DbErr> {
        entity::prelude::Branch::find_by_id(id)
            .filter(entity::branch::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Whether another branch of the company already uses `name`.
    ///
    /// # Arguments
    /// - `company_id` - Owning company
    /// - `name` - Candidate name
    /// - `exclude_id` - Branch being renamed, ignored in the check
    pub async fn name_exists(
        &self,
        company_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Branch::find()
            .filter(entity::branch::Column::CompanyId.eq(company_id))
            .filter(entity::branch::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::branch::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Inserts a branch for the company.
    ///
    /// # Arguments
    /// - `company_id` - Owning company
    /// - `params` - Validated branch fields
    ///
    /// # Returns
    /// - `Ok(branch::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        company_id: i32,
        params: BranchParams,
    ) -> Result<entity::branch::Model, DbErr> {
        let now = Utc::now();

        entity::branch::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            name: ActiveValue::Set(params.name),
            address: ActiveValue::Set(params.address),
            phone: ActiveValue::Set(params.phone),
            manager_name: ActiveValue::Set(params.manager_name),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites every editable field of the branch.
    pub async fn update(
        &self,
        branch: entity::branch::Model,
        params: BranchParams,
    ) -> Result<entity::branch::Model, DbErr> {
        let mut active: entity::branch::ActiveModel = branch.into();
        active.name = ActiveValue::Set(params.name);
        active.address = ActiveValue::Set(params.address);
        active.phone = ActiveValue::Set(params.phone);
        active.manager_name = ActiveValue::Set(params.manager_name);
        active.is_active = ActiveValue::Set(params.is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Moves the branch's menu items, tables, orders, ingredients, users and staff to
    /// company-wide scope. Run inside a transaction.
    pub async fn detach_children(&self, company_id: i32, branch_id: i32) -> Result<(), DbErr> {
        let no_branch = Expr::value(Option::<i32>::None);

        entity::prelude::MenuItem::update_many()
            .col_expr(entity::menu_item::Column::BranchId, no_branch.clone())
            .filter(entity::menu_item::Column::CompanyId.eq(company_id))
            .filter(entity::menu_item::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await?;
        entity::prelude::RestaurantTable::update_many()
            .col_expr(entity::restaurant_table::Column::BranchId, no_branch.clone())
            .filter(entity::restaurant_table::Column::CompanyId.eq(company_id))
            .filter(entity::restaurant_table::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await?;
        entity::prelude::Order::update_many()
            .col_expr(entity::order::Column::BranchId, no_branch.clone())
            .filter(entity::order::Column::CompanyId.eq(company_id))
            .filter(entity::order::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await?;
        entity::prelude::Ingredient::update_many()
            .col_expr(entity::ingredient::Column::BranchId, no_branch.clone())
            .filter(entity::ingredient::Column::CompanyId.eq(company_id))
            .filter(entity::ingredient::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await?;
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::BranchId, no_branch.clone())
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .filter(entity::user::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await?;
        entity::prelude::Staff::update_many()
            .col_expr(entity::staff::Column::BranchId, no_branch)
            .filter(entity::staff::Column::CompanyId.eq(company_id))
            .filter(entity::staff::Column::BranchId.eq(branch_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Deletes the branch. Returns whether a row was removed.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Branch::delete_many()
            .filter(entity::branch::Column::Id.eq(id))
            .filter(entity::branch::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
