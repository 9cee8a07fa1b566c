use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct TableGroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TableGroupRepository<'a, C> {
    /// Creates a new TableGroupRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `TableGroupRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the company's groups ordered by name.
    pub async fn get_all(&self, company_id: i32) -> Result<Vec<entity::table_group::Model>, DbErr> {
        entity::prelude::TableGroup::find()
            .filter(entity::table_group::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::table_group::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a group of the company.
    pub async fn find(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Option<entity::table_group::Model>, DbErr> {
        entity::prelude::TableGroup::find_by_id(id)
            .filter(entity::table_group::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Whether another group of the company already uses `name`.
    pub async fn name_exists(
        &self,
        company_id: i32,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::TableGroup::find()
            .filter(entity::table_group::Column::CompanyId.eq(company_id))
            .filter(entity::table_group::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(entity::table_group::Column::Id.ne(id));
        }

        Ok(query.one(self.db).await?.is_some())
    }

    /// Inserts a group for the company.
    pub async fn create(
        &self,
        company_id: i32,
        name: String,
    ) -> Result<entity::table_group::Model, DbErr> {
        entity::table_group::ActiveModel {
            company_id: ActiveValue::Set(Some(company_id)),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Stores a new name for the group.
    pub async fn rename(
        &self,
        group: entity::table_group::Model,
        name: String,
    ) -> Result<entity::table_group::Model, DbErr> {
        let mut active: entity::table_group::ActiveModel = group.into();
        active.name = ActiveValue::Set(name);

        active.update(self.db).await
    }

    /// Deletes the group. Returns whether a row was removed.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TableGroup::delete_many()
            .filter(entity::table_group::Column::Id.eq(id))
            .filter(entity::table_group::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
