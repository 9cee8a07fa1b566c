use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    staff::StaffParams,
    tenant::{branch_filter, Scope},
};

pub struct StaffRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StaffRepository<'a, C> {
    /// Creates a new StaffRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `StaffRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the scope's staff ordered by name.
    pub async fn get_all(&self, scope: Scope) -> Result<Vec<entity::staff::Model>, DbErr> {
        entity::prelude::Staff::find()
            .filter(entity::staff::Column::CompanyId.eq(scope.company_id))
            .filter(branch_filter(entity::staff::Column::BranchId, scope.branch_id))
            .order_by_asc(entity::staff::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a staff member of the company.
    pub async fn find(&self, company_id: i32, id: i32) -> Result<Option<entity::staff::Model>, DbErr> {
        entity::prelude::Staff::find_by_id(id)
            .filter(entity::staff::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Inserts a staff member in the scope.
    ///
    /// # Arguments
    /// - `scope` - Company and optional branch stamped on the row
    /// - `params` - Validated roster fields
    ///
    /// # Returns
    /// - `Ok(staff::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        scope: Scope,
        params: StaffParams,
    ) -> Result<entity::staff::Model, DbErr> {
        entity::staff::ActiveModel {
            company_id: ActiveValue::Set(Some(scope.company_id)),
            branch_id: ActiveValue::Set(scope.branch_id),
            name: ActiveValue::Set(params.name),
            role: ActiveValue::Set(params.role),
            phone: ActiveValue::Set(params.phone),
            email: ActiveValue::Set(params.email),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Overwrites the staff member's editable fields.
    pub async fn update(
        &self,
        staff: entity::staff::Model,
        params: StaffParams,
    ) -> Result<entity::staff::Model, DbErr> {
        let mut active: entity::staff::ActiveModel = staff.into();
        active.name = ActiveValue::Set(params.name);
        active.role = ActiveValue::Set(params.role);
        active.phone = ActiveValue::Set(params.phone);
        active.email = ActiveValue::Set(params.email);
        active.is_active = ActiveValue::Set(params.is_active);

        active.update(self.db).await
    }

    /// Deletes the staff member. Returns whether a row was removed.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Staff::delete_many()
            .filter(entity::staff::Column::Id.eq(id))
            .filter(entity::staff::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
