//! Custom role data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::role::RoleParams;

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `RoleRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a role by primary key regardless of company.
    ///
    /// Used by the permission guard, which already knows the caller's `role_id`.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find_by_id(id).one(self.db).await
    }

    /// Gets the company's roles ordered by name.
    pub async fn get_all(&self, company_id: i32) -> Result<Vec<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a role only if it belongs to the company.
    pub async fn find(&self, company_id: i32, id: i32) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find_by_id(id)
            .filter(entity::role::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Whether another role of the company already uses `name`.
    pub async fn name_exists(
        &self,
        company_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Role::find()
            .filter(entity::role::Column::CompanyId.eq(company_id))
            .filter(entity::role::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::role::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Inserts a role with its permissions stored as a JSON array.
    ///
    /// # Arguments
    /// - `company_id` - Owning company
    /// - `params` - Name and de-duplicated resources
    ///
    /// # Returns
    /// - `Ok(role::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        company_id: i32,
        params: RoleParams,
    ) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            company_id: ActiveValue::Set(Some(company_id)),
            permissions: ActiveValue::Set(params.permissions_json()),
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Replaces the role's name and permissions.
    pub async fn update(
        &self,
        role: entity::role::Model,
        params: RoleParams,
    ) -> Result<entity::role::Model, DbErr> {
        let mut active: entity::role::ActiveModel = role.into();
        active.permissions = ActiveValue::Set(params.permissions_json());
        active.name = ActiveValue::Set(params.name);

        active.update(self.db).await
    }

    /// Deletes the role if it belongs to the company. Returns whether a row was removed.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Role::delete_many()
            .filter(entity::role::Column::Id.eq(id))
            .filter(entity::role::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
