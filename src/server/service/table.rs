//! Restaurant tables and the groups they belong to.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{table::TableRepository, table_group::TableGroupRepository},
    error::AppError,
    model::{
        table::{CreateTableParams, TableWithGroup, UpdateTableParams},
        tenant::Scope,
    },
};

const TABLE_NOT_FOUND: &str = "Table not found or access denied";
const GROUP_NOT_FOUND: &str = "Table group not found";

fn duplicate_number(table_number: i32) -> AppError {
    AppError::BadRequest(format!(
        "Table number {} already exists. Please choose a different number.",
        table_number
    ))
}

pub struct TableService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active tables of the scope with their group names.
    pub async fn get_active(&self, scope: Scope) -> Result<Vec<TableWithGroup>, AppError> {
        Ok(TableRepository::new(self.db).get_active(scope).await?)
    }

    async fn ensure_group(&self, company_id: i32, group_id: i32) -> Result<(), AppError> {
        TableGroupRepository::new(self.db)
            .find(company_id, group_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(GROUP_NOT_FOUND.to_string()))
    }

    /// Creates a table with a number unique within the company.
    pub async fn create(
        &self,
        scope: Scope,
        params: CreateTableParams,
    ) -> Result<TableWithGroup, AppError> {
        let repo = TableRepository::new(self.db);

        if repo
            .number_exists(scope.company_id, params.table_number, None)
            .await?
        {
            return Err(duplicate_number(params.table_number));
        }
        if let Some(group_id) = params.group_id {
            self.ensure_group(scope.company_id, group_id).await?;
        }

        let table = repo.create(scope, params).await?;
        let group = repo.find_group(&table).await?;

        Ok(TableWithGroup { table, group })
    }

    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        params: UpdateTableParams,
    ) -> Result<TableWithGroup, AppError> {
        let repo = TableRepository::new(self.db);

        let Some(table) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(TABLE_NOT_FOUND.to_string()));
        };
        if repo
            .number_exists(company_id, params.table_number, Some(id))
            .await?
        {
            return Err(duplicate_number(params.table_number));
        }
        if let Some(Some(group_id)) = params.group_id {
            self.ensure_group(company_id, group_id).await?;
        }

        let table = repo.update(table, params).await?;
        let group = repo.find_group(&table).await?;

        Ok(TableWithGroup { table, group })
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        if !TableRepository::new(self.db).delete(company_id, id).await? {
            return Err(AppError::NotFound(TABLE_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}

pub struct TableGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TableGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        company_id: i32,
    ) -> Result<Vec<entity::table_group::Model>, AppError> {
        Ok(TableGroupRepository::new(self.db).get_all(company_id).await?)
    }

    pub async fn create(
        &self,
        company_id: i32,
        name: String,
    ) -> Result<entity::table_group::Model, AppError> {
        let repo = TableGroupRepository::new(self.db);

        if repo.name_exists(company_id, &name, None).await? {
            return Err(AppError::BadRequest("Group name already exists".to_string()));
        }

        Ok(repo.create(company_id, name).await?)
    }

    /// Renames a group, keeping names unique within the company.
    pub async fn rename(
        &self,
        company_id: i32,
        id: i32,
        name: String,
    ) -> Result<entity::table_group::Model, AppError> {
        let repo = TableGroupRepository::new(self.db);

        let Some(group) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(GROUP_NOT_FOUND.to_string()));
        };
        if repo.name_exists(company_id, &name, Some(id)).await? {
            return Err(AppError::BadRequest("Group name already exists".to_string()));
        }

        Ok(repo.rename(group, name).await?)
    }

    /// Deletes a group no table uses.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let repo = TableGroupRepository::new(self.db);

        if repo.find(company_id, id).await?.is_none() {
            return Err(AppError::NotFound(GROUP_NOT_FOUND.to_string()));
        }

        let in_use = TableRepository::new(self.db)
            .count_in_group(company_id, id)
            .await?;
        if in_use > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete group used by {} tables",
                in_use
            )));
        }

        repo.delete(company_id, id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{
        builder::TestBuilder,
        factory::{self, table::TableFactory},
    };

    use super::*;

    /// Expected: Err(BadRequest) while a table points at the group, Ok once it is moved
    #[tokio::test]
    async fn group_in_use_cannot_be_deleted() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        let group = factory::create_table_group(db, company.id).await?;
        let table = TableFactory::new(db, company.id)
            .group_id(Some(group.id))
            .build()
            .await?;
        let service = TableGroupService::new(db);

        let in_use = service.delete(company.id, group.id).await;
        match in_use {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("used by 1 tables")),
            other => panic!("Expected BadRequest, got: {:?}", other),
        }

        TableService::new(db)
            .update(
                company.id,
                table.id,
                UpdateTableParams {
                    table_number: table.table_number,
                    table_name: None,
                    group_id: Some(None),
                },
            )
            .await?;
        service.delete(company.id, group.id).await?;

        assert!(service.get_all(company.id).await?.is_empty());

        Ok(())
    }

    /// Expected: Err(NotFound) for a group of another company, Err(BadRequest) on a taken name
    #[tokio::test]
    async fn groups_are_company_scoped_and_unique() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        let other = factory::create_company(db).await?;
        let service = TableGroupService::new(db);

        let patio = service.create(company.id, "Patio".to_string()).await?;
        let duplicate = service.create(company.id, "Patio".to_string()).await;
        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

        service.create(other.id, "Patio".to_string()).await?;

        let foreign = service.delete(other.id, patio.id).await;
        assert!(matches!(foreign, Err(AppError::NotFound(_))));

        Ok(())
    }
}
