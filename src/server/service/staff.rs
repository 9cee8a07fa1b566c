use sea_orm::DatabaseConnection;

use crate::server::{
    data::staff::StaffRepository,
    error::AppError,
    model::{staff::StaffParams, tenant::Scope},
};

const STAFF_NOT_FOUND: &str = "Staff member not found";

pub struct StaffService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, scope: Scope) -> Result<Vec<entity::staff::Model>, AppError> {
        Ok(StaffRepository::new(self.db).get_all(scope).await?)
    }

    pub async fn create(
        &self,
        scope: Scope,
        params: StaffParams,
    ) -> Result<entity::staff::Model, AppError> {
        Ok(StaffRepository::new(self.db).create(scope, params).await?)
    }

    /// Updates a staff member of the company.
    ///
    /// # Returns
    /// - `Ok(Model)` - Updated staff row
    /// - `Err(AppError::NotFound)` - No such staff member in the company
    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        params: StaffParams,
    ) -> Result<entity::staff::Model, AppError> {
        let repo = StaffRepository::new(self.db);

        let Some(staff) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(STAFF_NOT_FOUND.to_string()));
        };

        Ok(repo.update(staff, params).await?)
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        if !StaffRepository::new(self.db).delete(company_id, id).await? {
            return Err(AppError::NotFound(STAFF_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
