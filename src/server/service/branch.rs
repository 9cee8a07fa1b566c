use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::branch::BranchRepository, error::AppError, model::branch::BranchParams,
};

const BRANCH_NOT_FOUND: &str = "Branch not found";
const DUPLICATE_BRANCH: &str = "Branch name already exists";

pub struct BranchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BranchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Branches of the company, ordered by name.
    pub async fn get_all(&self, company_id: i32) -> Result<Vec<entity::branch::Model>, AppError> {
        Ok(BranchRepository::new(self.db).get_all(company_id).await?)
    }

    pub async fn get_by_id(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<entity::branch::Model, AppError> {
        BranchRepository::new(self.db)
            .find(company_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(BRANCH_NOT_FOUND.to_string()))
    }

    /// Creates a branch after checking its name is free within the company.
    ///
    /// # Arguments
    /// - `company_id` - Owning company
    /// - `params` - Branch name and contact details
    ///
    /// # Returns
    /// - `Ok(Model)` - Created branch
    /// - `Err(AppError::BadRequest)` - Name already used by another branch of the company
    pub async fn create(
        &self,
        company_id: i32,
        params: BranchParams,
    ) -> Result<entity::branch::Model, AppError> {
        let repo = BranchRepository::new(self.db);

        if repo.name_exists(company_id, &params.name, None).await? {
            return Err(AppError::BadRequest(DUPLICATE_BRANCH.to_string()));
        }

        Ok(repo.create(company_id, params).await?)
    }

    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        params: BranchParams,
    ) -> Result<entity::branch::Model, AppError> {
        let repo = BranchRepository::new(self.db);

        let Some(branch) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(BRANCH_NOT_FOUND.to_string()));
        };
        if repo.name_exists(company_id, &params.name, Some(id)).await? {
            return Err(AppError::BadRequest(DUPLICATE_BRANCH.to_string()));
        }

        Ok(repo.update(branch, params).await?)
    }

    /// Moves the branch's rows to company-wide scope, then deletes it, in one transaction.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = BranchRepository::new(&txn);

        if repo.find(company_id, id).await?.is_none() {
            return Err(AppError::NotFound(BRANCH_NOT_FOUND.to_string()));
        }

        repo.detach_children(company_id, id).await?;
        repo.delete(company_id, id).await?;

        txn.commit().await?;

        tracing::info!("Deleted branch {} of company {}", id, company_id);

        Ok(())
    }
}
