use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct CompanyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompanyRepository<'a, C> {
    /// Creates a new CompanyRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `CompanyRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a company by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find_by_id(id).one(self.db).await
    }

    /// Finds a company by slug, case-insensitively.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .filter(entity::company::Column::Slug.eq(slug.trim().to_lowercase()))
            .one(self.db)
            .await
    }

    /// Most recently created company, used as the optional fallback tenant when a request
    /// carries no tenant signal.
    pub async fn find_latest(&self) -> Result<Option<entity::company::Model>, DbErr> {
        entity::prelude::Company::find()
            .order_by_desc(entity::company::Column::CreatedAt)
            .order_by_desc(entity::company::Column::Id)
            .one(self.db)
            .await
    }

    /// Inserts a company.
    ///
    /// # Arguments
    /// - `name` - Display name
    /// - `slug` - Subdomain label, unique across companies
    /// - `domain` - Optional custom domain
    ///
    /// # Returns
    /// - `Ok(company::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a slug collision
    pub async fn create(
        &self,
        name: String,
        slug: String,
        domain: Option<String>,
    ) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            name: ActiveValue::Set(name),
            slug: ActiveValue::Set(slug),
            domain: ActiveValue::Set(domain),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
