//! Company user parameter models.

use crate::{
    model::{
        auth::ProfileDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::error::AppError,
};

const DEFAULT_STAFF_ROLE: &str = "staff";

/// Validated fields for creating a company user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserParams {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
    pub role_id: Option<i32>,
    pub phone: Option<String>,
    pub branch_id: Option<i32>,
}

impl CreateUserParams {
    pub fn from_dto(dto: CreateUserDto) -> Result<Self, AppError> {
        let required = |value: Option<String>, field: &str| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| AppError::BadRequest(format!("{} is required", field)))
        };

        Ok(Self {
            full_name: required(dto.full_name, "Full name")?,
            email: required(dto.email, "Email")?.to_lowercase(),
            password: required(dto.password, "Password")?,
            role: dto
                .role
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_STAFF_ROLE.to_string()),
            role_id: dto.role_id,
            phone: dto.phone,
            branch_id: dto.branch_id,
        })
    }
}

/// Partial update of a company user; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateUserParams {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub role_id: Option<i32>,
    pub phone: Option<String>,
    pub branch_id: Option<i32>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        let present = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        Self {
            full_name: present(dto.full_name),
            email: present(dto.email).map(|e| e.trim().to_lowercase()),
            password: present(dto.password),
            role: present(dto.role),
            role_id: dto.role_id,
            phone: dto.phone,
            branch_id: dto.branch_id,
        }
    }
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            company_id: user.company_id,
            branch_id: user.branch_id,
            role_id: user.role_id,
            phone: user.phone,
            created_at: user.created_at,
        }
    }
}

impl From<entity::user::Model> for ProfileDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            full_name: user.full_name,
            email: user.email,
            role: user.role,
            company_id: user.company_id,
            branch_id: user.branch_id,
            role_id: user.role_id,
            phone: user.phone,
            created_at: user.created_at,
        }
    }
}
