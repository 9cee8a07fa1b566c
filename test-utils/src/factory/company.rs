//! Company factory for creating test tenants.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test companies with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let company = CompanyFactory::new(&db)
///     .name("Spice Route")
///     .slug("spice-route")
///     .build()
///     .await?;
/// ```
pub struct CompanyFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    slug: String,
    domain: Option<String>,
}

impl<'a> CompanyFactory<'a> {
    /// Creates a new CompanyFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Company {id}"`
    /// - slug: `"company-{id}"`
    /// - domain: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Company {}", id),
            slug: format!("company-{}", id),
            domain: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn domain(mut self, domain: Option<&str>) -> Self {
        self.domain = domain.map(str::to_string);
        self
    }

    /// Builds and inserts the company entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::company::Model)` - Created company entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::company::Model, DbErr> {
        entity::company::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            slug: ActiveValue::Set(self.slug),
            domain: ActiveValue::Set(self.domain),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a company with default values.
pub async fn create_company(db: &DatabaseConnection) -> Result<entity::company::Model, DbErr> {
    CompanyFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_company_with_unique_slug() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Company).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_company(db).await?;
        let second = create_company(db).await?;

        assert_ne!(first.slug, second.slug);
        assert!(first.domain.is_none());

        Ok(())
    }
}
