//! Restaurant table data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    table::{qr_code_data, CreateTableParams, TableWithGroup, UpdateTableParams},
    tenant::{branch_filter, Scope},
};

pub struct TableRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableRepository<'a, C> {
    /// Creates a new TableRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `TableRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Active tables of the scope with their group, ordered by table number.
    pub async fn get_active(&self, scope: Scope) -> Result<Vec<TableWithGroup>, DbErr> {
        let rows = entity::prelude::RestaurantTable::find()
            .find_also_related(entity::prelude::TableGroup)
            .filter(entity::restaurant_table::Column::CompanyId.eq(scope.company_id))
            .filter(branch_filter(
                entity::restaurant_table::Column::BranchId,
                scope.branch_id,
            ))
            .filter(entity::restaurant_table::Column::IsActive.eq(true))
            .order_by_asc(entity::restaurant_table::Column::TableNumber)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(table, group)| TableWithGroup { table, group })
            .collect())
    }

    /// Finds a table of the company, or `None` if unknown or foreign.
    pub async fn find(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Option<entity::restaurant_table::Model>, DbErr> {
        entity::prelude::RestaurantTable::find_by_id(id)
            .filter(entity::restaurant_table::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Finds a table of the company by its printed number.
    pub async fn find_by_number(
        &self,
        company_id: i32,
        table_number: i32,
    ) -> Result<Option<entity::restaurant_table::Model>, DbErr> {
        entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::CompanyId.eq(company_id))
            .filter(entity::restaurant_table::Column::TableNumber.eq(table_number))
            .filter(entity::restaurant_table::Column::IsActive.eq(true))
            .one(self.db)
            .await
    }

    /// Whether another table of the company already uses `table_number`.
    pub async fn number_exists(
        &self,
        company_id: i32,
        table_number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::CompanyId.eq(company_id))
            .filter(entity::restaurant_table::Column::TableNumber.eq(table_number));
        if let Some(id) = exclude_id {
            query = query.filter(entity::restaurant_table::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Inserts an active table and derives its QR code payload from the number.
    ///
    /// # Arguments
    /// - `scope` - Company and optional branch stamped on the row
    /// - `params` - Number, optional name and optional group
    ///
    /// # Returns
    /// - `Ok(restaurant_table::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        scope: Scope,
        params: CreateTableParams,
    ) -> Result<entity::restaurant_table::Model, DbErr> {
        entity::restaurant_table::ActiveModel {
            company_id: ActiveValue::Set(Some(scope.company_id)),
            branch_id: ActiveValue::Set(scope.branch_id),
            table_number: ActiveValue::Set(params.table_number),
            table_name: ActiveValue::Set(Some(params.table_name)),
            qr_code_data: ActiveValue::Set(qr_code_data(params.table_number)),
            group_id: ActiveValue::Set(params.group_id),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies a renumber, rename or regroup; the QR payload follows the number.
    pub async fn update(
        &self,
        table: entity::restaurant_table::Model,
        params: UpdateTableParams,
    ) -> Result<entity::restaurant_table::Model, DbErr> {
        let mut active: entity::restaurant_table::ActiveModel = table.into();
        active.table_number = ActiveValue::Set(params.table_number);
        active.qr_code_data = ActiveValue::Set(qr_code_data(params.table_number));
        if let Some(name) = params.table_name {
            active.table_name = ActiveValue::Set(Some(name));
        }
        if let Some(group_id) = params.group_id {
            active.group_id = ActiveValue::Set(group_id);
        }

        active.update(self.db).await
    }

    /// Deletes the table. Returns whether a row was removed.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::RestaurantTable::delete_many()
            .filter(entity::restaurant_table::Column::Id.eq(id))
            .filter(entity::restaurant_table::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of the company's tables assigned to the group.
    pub async fn count_in_group(&self, company_id: i32, group_id: i32) -> Result<u64, DbErr> {
        entity::prelude::RestaurantTable::find()
            .filter(entity::restaurant_table::Column::CompanyId.eq(company_id))
            .filter(entity::restaurant_table::Column::GroupId.eq(group_id))
            .count(self.db)
            .await
    }

    /// Loads the group a table belongs to, if any.
    pub async fn find_group(
        &self,
        table: &entity::restaurant_table::Model,
    ) -> Result<Option<entity::table_group::Model>, DbErr> {
        match table.group_id {
            Some(group_id) => {
                entity::prelude::TableGroup::find_by_id(group_id)
                    .one(self.db)
                    .await
            }
            None => Ok(None),
        }
    }
}
