use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        role::{RoleDto, SaveRoleDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::AuthTenant,
        },
        model::role::RoleParams,
        service::role::RoleService,
        state::AppState,
    },
};

pub static ROLE_TAG: &str = "role";

/// Lists the custom roles of the caller's company.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "Roles of the company", body = DataDto<Vec<RoleDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let roles = RoleService::new(&state.db)
        .get_all(tenant.company_id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(roles))))
}

/// Creates a custom role granting management access to a set of resources.
///
/// # Access Control
/// - `Admin` - Only admins and owners define roles
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` / `tenant` - Verified caller and company scope
/// - `payload` - Role name and resource names (`menu`, `tables`, `orders`, ...)
///
/// # Returns
/// - `201 Created` - New role
/// - `400 Bad Request` - Missing or duplicate name, or an unknown resource
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ROLE_TAG,
    request_body = SaveRoleDto,
    responses(
        (status = 201, description = "Role created", body = DataDto<RoleDto>),
        (status = 400, description = "Missing or duplicate name, unknown permission", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_role(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<SaveRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db)
        .create(tenant.company_id, RoleParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(role))))
}

/// Renames a role and replaces its permissions.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated role
/// - `400 Bad Request` - Missing or duplicate name, or an unknown resource
/// - `404 Not Found` - Role unknown or owned by another company
#[utoipa::path(
    put,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    request_body = SaveRoleDto,
    responses(
        (status = 200, description = "Role updated", body = DataDto<RoleDto>),
        (status = 400, description = "Missing or duplicate name, unknown permission", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_role(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<SaveRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db)
        .update(tenant.company_id, id, RoleParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(role))))
}

/// Deletes a role no user holds.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Role deleted
/// - `400 Bad Request` - Users are still assigned to the role
/// - `404 Not Found` - Role unknown or owned by another company
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role deleted", body = MessageDto),
        (status = 400, description = "Role still assigned to users", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    RoleService::new(&state.db)
        .delete(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Role deleted"))))
}
