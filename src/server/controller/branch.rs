use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        branch::{BranchDto, SaveBranchDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::AuthTenant,
        },
        model::branch::BranchParams,
        service::branch::BranchService,
        state::AppState,
    },
};

pub static BRANCH_TAG: &str = "branch";

/// Lists the branches of the caller's company.
#[utoipa::path(
    get,
    path = "/api/branches",
    tag = BRANCH_TAG,
    responses(
        (status = 200, description = "Branches of the company", body = DataDto<Vec<BranchDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_branches(
    State(state): State<AppState>,
    AuthTenant { tenant, .. }: AuthTenant,
) -> Result<impl IntoResponse, AppError> {
    let branches = BranchService::new(&state.db)
        .get_all(tenant.company_id)
        .await?;

    let dto: Vec<BranchDto> = branches.into_iter().map(BranchDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Fetches one branch of the caller's company.
///
/// # Returns
/// - `200 OK` - Branch
/// - `404 Not Found` - Branch unknown or owned by another company
#[utoipa::path(
    get,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(("id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch", body = DataDto<BranchDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_branch(
    State(state): State<AppState>,
    AuthTenant { tenant, .. }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let branch = BranchService::new(&state.db)
        .get_by_id(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(BranchDto::from(branch)))))
}

/// Creates a branch.
///
/// # Access Control
/// - `Admin` - Only admins and owners can manage branches
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` / `tenant` - Verified caller and company scope
/// - `payload` - Name, address, phone, manager and active flag
///
/// # Returns
/// - `201 Created` - New branch
/// - `400 Bad Request` - Missing name or a name already used in the company
/// - `403 Forbidden` - Caller is not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/branches",
    tag = BRANCH_TAG,
    request_body = SaveBranchDto,
    responses(
        (status = 201, description = "Branch created", body = DataDto<BranchDto>),
        (status = 400, description = "Missing or duplicate name", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_branch(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<SaveBranchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let branch = BranchService::new(&state.db)
        .create(tenant.company_id, BranchParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(BranchDto::from(branch)))))
}

/// Replaces a branch's details.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Updated branch
/// - `400 Bad Request` - Missing or duplicate name
/// - `404 Not Found` - Branch unknown or owned by another company
#[utoipa::path(
    put,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(("id" = i32, Path, description = "Branch ID")),
    request_body = SaveBranchDto,
    responses(
        (status = 200, description = "Branch updated", body = DataDto<BranchDto>),
        (status = 400, description = "Missing or duplicate name", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_branch(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<SaveBranchDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    let branch = BranchService::new(&state.db)
        .update(tenant.company_id, id, BranchParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(BranchDto::from(branch)))))
}

/// Deletes a branch after moving its menu items, tables, orders, ingredients, users and
/// staff to company-wide scope.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Branch deleted
/// - `404 Not Found` - Branch unknown or owned by another company
#[utoipa::path(
    delete,
    path = "/api/branches/{id}",
    tag = BRANCH_TAG,
    params(("id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Branch deleted, its rows moved to company scope", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Admin access required", body = ErrorDto),
        (status = 404, description = "Branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_branch(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Admin])
        .await?;

    BranchService::new(&state.db)
        .delete(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Branch deleted"))))
}
