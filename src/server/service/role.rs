//! Custom per-company roles.

use sea_orm::DatabaseConnection;

use crate::{
    model::role::RoleDto,
    server::{
        data::{role::RoleRepository, user::UserRepository},
        error::AppError,
        model::role::{role_into_dto, RoleParams},
    },
};

const ROLE_NOT_FOUND: &str = "Role not found";
const DUPLICATE_ROLE: &str = "Role name already exists";

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, company_id: i32) -> Result<Vec<RoleDto>, AppError> {
        let roles = RoleRepository::new(self.db).get_all(company_id).await?;

        roles
            .into_iter()
            .map(|role| role_into_dto(role).map_err(AppError::from))
            .collect()
    }

    /// Creates a custom role.
    ///
    /// # Arguments
    /// - `company_id` - Owning company
    /// - `params` - Role name and the resources it grants
    ///
    /// # Returns
    /// - `Ok(RoleDto)` - Created role with parsed permissions
    /// - `Err(AppError::BadRequest)` - Name already used within the company
    pub async fn create(&self, company_id: i32, params: RoleParams) -> Result<RoleDto, AppError> {
        let repo = RoleRepository::new(self.db);

        if repo.name_exists(company_id, &params.name, None).await? {
            return Err(AppError::BadRequest(DUPLICATE_ROLE.to_string()));
        }

        let role = repo.create(company_id, params).await?;

        Ok(role_into_dto(role)?)
    }

    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        params: RoleParams,
    ) -> Result<RoleDto, AppError> {
        let repo = RoleRepository::new(self.db);

        let Some(role) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(ROLE_NOT_FOUND.to_string()));
        };
        if repo.name_exists(company_id, &params.name, Some(id)).await? {
            return Err(AppError::BadRequest(DUPLICATE_ROLE.to_string()));
        }

        let role = repo.update(role, params).await?;

        Ok(role_into_dto(role)?)
    }

    /// Deletes a role that no user holds.
    ///
    /// # Returns
    /// - `Ok(())` - Role deleted
    /// - `Err(AppError::NotFound)` - Unknown role or role of another company
    /// - `Err(AppError::BadRequest)` - Users are still assigned to the role
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        let repo = RoleRepository::new(self.db);

        if repo.find(company_id, id).await?.is_none() {
            return Err(AppError::NotFound(ROLE_NOT_FOUND.to_string()));
        }

        let holders = UserRepository::new(self.db).count_with_role(id).await?;
        if holders > 0 {
            return Err(AppError::BadRequest(format!(
                "Cannot delete role assigned to {} user(s)",
                holders
            )));
        }

        repo.delete(company_id, id).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::model::role::Resource;

    /// Expected: Err(BadRequest) while a user holds the role, Ok after reassignment
    #[tokio::test]
    async fn held_role_cannot_be_deleted() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        let role = factory::create_role(db, company.id, &["menu"]).await?;
        let holder = factory::user::UserFactory::new(db)
            .role("staff")
            .company_id(Some(company.id))
            .role_id(Some(role.id))
            .build()
            .await?;
        let service = RoleService::new(db);

        let held = service.delete(company.id, role.id).await;
        match held {
            Err(AppError::BadRequest(msg)) => assert!(msg.contains("1 user(s)")),
            other => panic!("Expected BadRequest, got: {:?}", other),
        }

        UserRepository::new(db).delete(company.id, holder.id).await?;
        service.delete(company.id, role.id).await?;

        assert!(service.get_all(company.id).await?.is_empty());

        Ok(())
    }

    /// Expected: Err(NotFound) when another company updates or deletes the role
    #[tokio::test]
    async fn roles_are_company_scoped() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        let other = factory::create_company(db).await?;
        let service = RoleService::new(db);
        let params = || RoleParams {
            name: "Waiter".to_string(),
            permissions: vec![Resource::Orders, Resource::Tables],
        };

        let waiter = service.create(company.id, params()).await?;
        assert_eq!(waiter.permissions, vec!["orders", "tables"]);

        let duplicate = service.create(company.id, params()).await;
        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

        let update = service.update(other.id, waiter.id, params()).await;
        let delete = service.delete(other.id, waiter.id).await;
        assert!(matches!(update, Err(AppError::NotFound(_))));
        assert!(matches!(delete, Err(AppError::NotFound(_))));

        Ok(())
    }
}
