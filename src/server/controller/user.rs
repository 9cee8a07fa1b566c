use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::AuthTenant,
        },
        model::user::{CreateUserParams, UpdateUserParams},
        service::user::UserService,
        state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Lists the login accounts of the caller's company.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Users of the company", body = DataDto<Vec<UserDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_users(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .get_all(tenant.company_id)
        .await?;

    let dto: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Creates a login account in the caller's company.
///
/// # Access Control
/// - `Admin` - Only admins and owners manage accounts
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` / `tenant` - Verified caller and company scope
/// - `payload` - Name, email, password, role string and optional role, branch and phone
///
/// # Returns
/// - `201 Created` - New user
/// - `400 Bad Request` - Missing fields or email already registered
/// - `403 Forbidden` - Caller is not an admin
/// - `404 Not Found` - Role or branch belongs to another company
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = DataDto<UserDto>),
        (status = 400, description = "Missing fields or email already registered", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Role or branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_user(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .create(tenant.company_id, CreateUserParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(UserDto::from(user)))))
}

/// Applies a partial update to a user of the company.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Email taken by another account
/// - `404 Not Found` - User, role or branch outside the company
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = DataDto<UserDto>),
        (status = 400, description = "Email already registered", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User, role or branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_user(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let user = UserService::new(&state.db)
        .update(tenant.company_id, id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(UserDto::from(user)))))
}

/// Deletes a user of the company.
///
/// # Access Control
/// - `Admin` - Admins cannot delete their own account
///
/// # Returns
/// - `200 OK` - User deleted
/// - `400 Bad Request` - Attempt to delete the caller's own account
/// - `404 Not Found` - User unknown or owned by another company
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = MessageDto),
        (status = 400, description = "Cannot delete own account", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    UserService::new(&state.db)
        .delete(tenant.company_id, admin.id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("User deleted"))))
}
