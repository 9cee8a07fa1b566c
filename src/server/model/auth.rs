//! Registration and login models.

use crate::{
    model::auth::{AuthResponseDto, AuthUserDto, CompanyLinkDto, RegisterDto},
    server::error::AppError,
};

const DEFAULT_REGISTER_ROLE: &str = "customer";

#[derive(Debug, Clone, PartialEq)]
pub struct RegisterParams {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl RegisterParams {
    pub fn from_dto(dto: RegisterDto) -> Result<Self, AppError> {
        let full_name = dto.full_name.trim().to_string();
        let email = dto.email.trim().to_lowercase();
        if full_name.is_empty() || email.is_empty() || dto.password.is_empty() {
            return Err(AppError::BadRequest(
                "Full name, email and password are required".to_string(),
            ));
        }

        Ok(Self {
            full_name,
            email,
            password: dto.password,
            role: dto
                .role
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| DEFAULT_REGISTER_ROLE.to_string()),
        })
    }
}

/// Where a request came from, used to build tenant frontend URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOrigin {
    pub origin: Option<String>,
    pub host: Option<String>,
}

/// A user that just proved their identity, with a fresh token.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: entity::user::Model,
    pub token: String,
    pub company: Option<CompanyLinkDto>,
}

impl Authenticated {
    pub fn into_dto(self, message: &str) -> AuthResponseDto {
        AuthResponseDto {
            success: true,
            message: message.to_string(),
            data: AuthUserDto {
                id: self.user.id,
                full_name: self.user.full_name,
                email: self.user.email,
                role: self.user.role,
                company_id: self.user.company_id,
                branch_id: self.user.branch_id,
                token: self.token,
            },
            company: self.company,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_defaults_to_customer() {
        let params = RegisterParams::from_dto(RegisterDto {
            full_name: " Asha Rao ".to_string(),
            email: "Asha@Example.com".to_string(),
            password: "secret".to_string(),
            role: None,
        })
        .unwrap();

        assert_eq!(params.full_name, "Asha Rao");
        assert_eq!(params.email, "asha@example.com");
        assert_eq!(params.role, "customer");
    }

    #[test]
    fn register_requires_password() {
        let result = RegisterDto {
            full_name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            password: String::new(),
            role: Some("admin".to_string()),
        };

        assert!(matches!(
            RegisterParams::from_dto(result),
            Err(AppError::BadRequest(_))
        ));
    }
}
