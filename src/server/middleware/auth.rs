//! Bearer-token authentication extractors and the permission guard.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{role::RoleRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::role::{is_admin_role, is_staff_role, parse_permissions, Resource},
    service::token::Claims,
    state::AppState,
};

/// Token carried by an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Verified claims of the caller. Rejects the request when the token is absent or invalid.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        Ok(Self(state.tokens.verify(token)?))
    }
}

/// Claims of the caller when a valid token is present. Invalid tokens count as absent.
#[derive(Debug, Clone, Default)]
pub struct OptionalAuthUser(pub Option<Claims>);

impl FromRequestParts<AppState> for OptionalAuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_token(&parts.headers).and_then(|token| match state.tokens.verify(token) {
            Ok(claims) => Some(claims),
            Err(e) => {
                tracing::debug!("Ignoring bearer token on public route: {}", e);
                None
            }
        });

        Ok(Self(claims))
    }
}

pub enum Permission {
    /// Role string `admin` or `owner`.
    Admin,
    /// Admins, staff without a custom role, or a role granting the resource.
    /// Customers never pass.
    Manage(Resource),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    claims: &'a Claims,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, claims: &'a Claims) -> Self {
        Self { db, claims }
    }

    /// Loads the caller and checks every permission in order.
    ///
    /// # Returns
    /// - `Ok(user::Model)` - The caller, when all permissions are satisfied
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted user
    /// - `Err(AuthError::AccessDenied)` - First permission the caller lacks; customers
    ///   fail every `Manage`
    /// - `Err(InternalError::MalformedPermissions)` - Stored role permissions are not a JSON list
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_id = self.claims.id;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        let is_admin = is_admin_role(&user.role);

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !is_admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("role '{}' attempted an admin-only action", user.role),
                        )
                        .into());
                    }
                }
                Permission::Manage(resource) => {
                    if is_admin {
                        continue;
                    }
                    if !is_staff_role(&user.role) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("role '{}' cannot manage '{}'", user.role, resource.as_str()),
                        )
                        .into());
                    }
                    let Some(role_id) = user.role_id else {
                        continue;
                    };

                    let granted = match RoleRepository::new(self.db).find_by_id(role_id).await? {
                        Some(role) => parse_permissions(&role)?
                            .iter()
                            .any(|p| p == resource.as_str()),
                        None => false,
                    };
                    if !granted {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            format!("role {} lacks '{}' access", role_id, resource.as_str()),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
