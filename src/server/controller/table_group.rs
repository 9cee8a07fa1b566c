use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        table::{SaveTableGroupDto, TableGroupDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::AuthTenant,
        },
        model::{role::Resource, table::validate_group_name},
        service::table::TableGroupService,
        state::AppState,
    },
};

pub static TABLE_GROUP_TAG: &str = "table_group";

/// Lists the company's table groups.
///
/// # Access Control
/// - `Manage(Tables)`
#[utoipa::path(
    get,
    path = "/api/table-groups",
    tag = TABLE_GROUP_TAG,
    responses(
        (status = 200, description = "Table groups of the company", body = DataDto<Vec<TableGroupDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_table_groups(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Tables)])
        .await?;

    let groups = TableGroupService::new(&state.db)
        .get_all(tenant.company_id)
        .await?;

    let dto: Vec<TableGroupDto> = groups.into_iter().map(TableGroupDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Creates a table group.
///
/// # Access Control
/// - `Manage(Tables)`
///
/// # Returns
/// - `201 Created` - New group
/// - `400 Bad Request` - Name missing or already used in the company
#[utoipa::path(
    post,
    path = "/api/table-groups",
    tag = TABLE_GROUP_TAG,
    request_body = SaveTableGroupDto,
    responses(
        (status = 201, description = "Table group created", body = DataDto<TableGroupDto>),
        (status = 400, description = "Missing or duplicate name", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_table_group(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<SaveTableGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Tables)])
        .await?;

    let group = TableGroupService::new(&state.db)
        .create(tenant.company_id, validate_group_name(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::new(TableGroupDto::from(group))),
    ))
}

/// Renames a table group.
///
/// # Access Control
/// - `Manage(Tables)`
///
/// # Returns
/// - `200 OK` - Renamed group
/// - `400 Bad Request` - Name missing or already used
/// - `404 Not Found` - Group unknown or owned by another company
#[utoipa::path(
    put,
    path = "/api/table-groups/{id}",
    tag = TABLE_GROUP_TAG,
    params(("id" = i32, Path, description = "Table group ID")),
    request_body = SaveTableGroupDto,
    responses(
        (status = 200, description = "Table group renamed", body = DataDto<TableGroupDto>),
        (status = 400, description = "Missing or duplicate name", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Table group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_table_group(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<SaveTableGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Tables)])
        .await?;

    let group = TableGroupService::new(&state.db)
        .rename(tenant.company_id, id, validate_group_name(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(TableGroupDto::from(group)))))
}

/// Deletes a table group no table belongs to.
///
/// # Access Control
/// - `Manage(Tables)`
///
/// # Returns
/// - `200 OK` - Group deleted
/// - `400 Bad Request` - Tables still belong to the group
/// - `404 Not Found` - Group unknown or owned by another company
#[utoipa::path(
    delete,
    path = "/api/table-groups/{id}",
    tag = TABLE_GROUP_TAG,
    params(("id" = i32, Path, description = "Table group ID")),
    responses(
        (status = 200, description = "Table group deleted", body = MessageDto),
        (status = 400, description = "Group still used by tables", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Table group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_table_group(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Tables)])
        .await?;

    TableGroupService::new(&state.db)
        .delete(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Table group deleted"))))
}
