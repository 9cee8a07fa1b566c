//! User data repository.
//!
//! Emails are stored trimmed and lowercased, and every lookup by email normalizes the same
//! way.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParams, UpdateUserParams};

/// Repository providing database operations for login accounts.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

/// Fields of a newly registered or admin-created user.
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub role_id: Option<i32>,
    pub phone: Option<String>,
}

impl NewUser {
    /// Builds the insert for an admin-created user of `company_id`.
    pub fn from_params(params: CreateUserParams, company_id: i32, password_hash: String) -> Self {
        Self {
            full_name: params.full_name,
            email: params.email,
            password_hash,
            role: params.role,
            company_id: Some(company_id),
            branch_id: params.branch_id,
            role_id: params.role_id,
            phone: params.phone,
        }
    }
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a user by primary key regardless of company.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    /// Finds a user by email, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await
    }

    /// Inserts a user.
    ///
    /// # Arguments
    /// - `user` - Fields of the new account, password already hashed
    ///
    /// # Returns
    /// - `Ok(user::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error, including a duplicate email
    pub async fn create(&self, user: NewUser) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            full_name: ActiveValue::Set(user.full_name),
            email: ActiveValue::Set(user.email.trim().to_lowercase()),
            password_hash: ActiveValue::Set(user.password_hash),
            role: ActiveValue::Set(user.role),
            company_id: ActiveValue::Set(user.company_id),
            branch_id: ActiveValue::Set(user.branch_id),
            role_id: ActiveValue::Set(user.role_id),
            phone: ActiveValue::Set(user.phone),
            reset_token: ActiveValue::Set(None),
            reset_token_expires: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets the company's users ordered by full name.
    pub async fn get_by_company(&self, company_id: i32) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .order_by_asc(entity::user::Column::FullName)
            .all(self.db)
            .await
    }

    /// Finds a user only if they belong to the company.
    pub async fn find_in_company(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Applies a partial update; a new password must already be hashed.
    pub async fn update(
        &self,
        user: entity::user::Model,
        params: UpdateUserParams,
        password_hash: Option<String>,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        if let Some(full_name) = params.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(hash) = password_hash {
            active.password_hash = ActiveValue::Set(hash);
        }
        if let Some(role) = params.role {
            active.role = ActiveValue::Set(role);
        }
        if params.role_id.is_some() {
            active.role_id = ActiveValue::Set(params.role_id);
        }
        if params.phone.is_some() {
            active.phone = ActiveValue::Set(params.phone);
        }
        if params.branch_id.is_some() {
            active.branch_id = ActiveValue::Set(params.branch_id);
        }

        active.update(self.db).await
    }

    /// Deletes a user of the company. Returns whether a row was removed.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_many()
            .filter(entity::user::Column::Id.eq(id))
            .filter(entity::user::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Number of users holding the custom role.
    pub async fn count_with_role(&self, role_id: i32) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::RoleId.eq(role_id))
            .count(self.db)
            .await
    }

    /// Stores a password reset token and its expiry on the user.
    ///
    /// # Arguments
    /// - `user_id` - Account requesting the reset
    /// - `token` - Random token sent in the email link
    /// - `expires` - Instant after which the token is rejected
    ///
    /// # Returns
    /// - `Ok(())` - Token stored
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_reset_token(
        &self,
        user_id: i32,
        token: String,
        expires: DateTime<Utc>,
    ) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .col_expr(entity::user::Column::ResetToken, Expr::value(Some(token)))
            .col_expr(
                entity::user::Column::ResetTokenExpires,
                Expr::value(Some(expires)),
            )
            .filter(entity::user::Column::Id.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Finds the user holding `token` if it has not expired at `now`.
    pub async fn find_by_reset_token(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::ResetToken.eq(token))
            .filter(entity::user::Column::ResetTokenExpires.gt(now))
            .one(self.db)
            .await
    }

    /// Stores a new password hash and invalidates the reset token.
    pub async fn reset_password(
        &self,
        user: entity::user::Model,
        password_hash: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.password_hash = ActiveValue::Set(password_hash);
        active.reset_token = ActiveValue::Set(None);
        active.reset_token_expires = ActiveValue::Set(None);

        active.update(self.db).await
    }

    /// Clears reset tokens that expired before `now`. Returns the number of users touched.
    pub async fn clear_expired_reset_tokens(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::User::update_many()
            .col_expr(
                entity::user::Column::ResetToken,
                Expr::value(Option::<String>::None),
            )
            .col_expr(
                entity::user::Column::ResetTokenExpires,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(entity::user::Column::ResetToken.is_not_null())
            .filter(entity::user::Column::ResetTokenExpires.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
