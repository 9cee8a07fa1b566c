//! Admin management of company users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        branch::BranchRepository,
        role::RoleRepository,
        user::{NewUser, UserRepository},
    },
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams},
    service::auth::hash_password,
};

const USER_NOT_FOUND: &str = "User not found";

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Users of the company.
    pub async fn get_all(&self, company_id: i32) -> Result<Vec<entity::user::Model>, AppError> {
        Ok(UserRepository::new(self.db).get_by_company(company_id).await?)
    }

    /// Ensures the referenced role and branch belong to the company.
    async fn check_references(
        &self,
        company_id: i32,
        role_id: Option<i32>,
        branch_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(role_id) = role_id {
            if RoleRepository::new(self.db)
                .find(company_id, role_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Role not found".to_string()));
            }
        }
        if let Some(branch_id) = branch_id {
            if BranchRepository::new(self.db)
                .find(company_id, branch_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound("Branch not found".to_string()));
            }
        }

        Ok(())
    }

    /// Creates a user inside the admin's company.
    ///
    /// # Returns
    /// - `Ok(user::Model)` - New user
    /// - `Err(AppError::BadRequest)` - Email already registered
    /// - `Err(AppError::NotFound)` - Role or branch outside the company
    pub async fn create(
        &self,
        company_id: i32,
        params: CreateUserParams,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&params.email).await?.is_some() {
            return Err(AppError::BadRequest(
                "User with this email already exists".to_string(),
            ));
        }
        self.check_references(company_id, params.role_id, params.branch_id)
            .await?;

        let password_hash = hash_password(params.password.clone()).await?;
        let user = repo
            .create(NewUser::from_params(params, company_id, password_hash))
            .await?;

        tracing::info!("Created user {} in company {}", user.id, company_id);

        Ok(user)
    }

    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        params: UpdateUserParams,
    ) -> Result<entity::user::Model, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_in_company(company_id, id).await? else {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        };
        if let Some(email) = &params.email {
            if let Some(other) = repo.find_by_email(email).await? {
                if other.id != user.id {
                    return Err(AppError::BadRequest(
                        "User with this email already exists".to_string(),
                    ));
                }
            }
        }
        self.check_references(company_id, params.role_id, params.branch_id)
            .await?;

        let password_hash = match params.password.clone() {
            Some(password) => Some(hash_password(password).await?),
            None => None,
        };

        Ok(repo.update(user, params, password_hash).await?)
    }

    /// Deletes a user of the company. Admins cannot delete themselves.
    pub async fn delete(&self, company_id: i32, acting_user_id: i32, id: i32) -> Result<(), AppError> {
        if acting_user_id == id {
            return Err(AppError::BadRequest(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::new(self.db).delete(company_id, id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    fn new_waiter(email: &str) -> CreateUserParams {
        CreateUserParams {
            full_name: "Ravi Kumar".to_string(),
            email: email.to_string(),
            password: "w4iter".to_string(),
            role: "staff".to_string(),
            role_id: None,
            phone: None,
            branch_id: None,
        }
    }

    /// Expected: Err(BadRequest) for the acting admin, Ok for another user
    #[tokio::test]
    async fn admin_cannot_delete_self() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (company, admin) = factory::helpers::create_company_with_admin(db).await?;
        let staff = factory::user::UserFactory::new(db)
            .role("staff")
            .company_id(Some(company.id))
            .build()
            .await?;
        let service = UserService::new(db);

        let own = service.delete(company.id, admin.id, admin.id).await;
        assert!(matches!(own, Err(AppError::BadRequest(_))));

        service.delete(company.id, admin.id, staff.id).await?;
        let missing = service.delete(company.id, admin.id, staff.id).await;
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Expected: Err(NotFound) when the role or branch belongs to another company
    #[tokio::test]
    async fn foreign_role_or_branch_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        let other = factory::create_company(db).await?;
        let foreign_role = factory::create_role(db, other.id, &["orders"]).await?;
        let foreign_branch = factory::create_branch(db, other.id).await?;
        let own_role = factory::create_role(db, company.id, &["orders"]).await?;
        let service = UserService::new(db);

        let with_role = service
            .create(
                company.id,
                CreateUserParams {
                    role_id: Some(foreign_role.id),
                    ..new_waiter("ravi@bistro.test")
                },
            )
            .await;
        let with_branch = service
            .create(
                company.id,
                CreateUserParams {
                    branch_id: Some(foreign_branch.id),
                    ..new_waiter("ravi@bistro.test")
                },
            )
            .await;
        assert!(matches!(with_role, Err(AppError::NotFound(msg)) if msg == "Role not found"));
        assert!(matches!(with_branch, Err(AppError::NotFound(msg)) if msg == "Branch not found"));

        let waiter = service
            .create(
                company.id,
                CreateUserParams {
                    role_id: Some(own_role.id),
                    ..new_waiter("ravi@bistro.test")
                },
            )
            .await?;
        assert_eq!(waiter.company_id, Some(company.id));
        assert_eq!(waiter.role_id, Some(own_role.id));

        let moved = service
            .update(
                company.id,
                waiter.id,
                UpdateUserParams {
                    branch_id: Some(foreign_branch.id),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(moved, Err(AppError::NotFound(_))));

        let duplicate = service
            .create(company.id, new_waiter("ravi@bistro.test"))
            .await;
        assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

        Ok(())
    }
}
