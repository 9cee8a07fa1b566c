use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    #[serde(rename = "fullName", alias = "full_name")]
    pub full_name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `customer`.
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ForgotPasswordDto {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResetPasswordDto {
    pub token: String,
    #[serde(rename = "newPassword", alias = "new_password")]
    pub new_password: String,
}

/// User profile plus the freshly issued bearer token.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthUserDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub token: String,
}

/// Company the user belongs to, with the tenant URL the frontend should redirect to.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyLinkDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    pub success: bool,
    pub message: String,
    pub data: AuthUserDto,
    pub company: Option<CompanyLinkDto>,
}

/// Profile returned by `GET /api/auth/me`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub role_id: Option<i32>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}
