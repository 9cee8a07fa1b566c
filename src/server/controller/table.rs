use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        table::{CreateTableDto, TableDto, UpdateTableDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::AuthTenant,
        },
        model::{
            role::Resource,
            table::{CreateTableParams, UpdateTableParams},
        },
        service::table::TableService,
        state::AppState,
    },
};

pub static TABLE_TAG: &str = "table";

/// Lists the tenant's active tables with their group, ordered by number.
///
/// # Access Control
/// - `Manage(Tables)`
#[utoipa::path(
    get,
    path = "/api/tables",
    tag = TABLE_TAG,
    responses(
        (status = 200, description = "Active tables ordered by number", body = DataDto<Vec<TableDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_tables(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Tables)])
        .await?;

    let tables = TableService::new(&state.db)
        .get_active(tenant.scope())
        .await?;

    let dto: Vec<TableDto> = tables.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Creates a table and its QR code payload.
///
/// # Access Control
/// - `Manage(Tables)` - Admins, staff without a custom role, or a role granting `tables`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` / `tenant` - Verified caller and company/branch scope
/// - `payload` - Table number, optional name and optional group
///
/// # Returns
/// - `201 Created` - New table with its group
/// - `400 Bad Request` - Table number missing or already used in the company
/// - `403 Forbidden` - Caller may not manage tables
/// - `404 Not Found` - Group unknown or owned by another company
#[utoipa::path(
    post,
    path = "/api/tables",
    tag = TABLE_TAG,
    request_body = CreateTableDto,
    responses(
        (status = 201, description = "Table created", body = DataDto<TableDto>),
        (status = 400, description = "Missing or duplicate table number", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Table group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_table(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<CreateTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Tables)])
        .await?;

    let table = TableService::new(&state.db)
        .create(tenant.scope(), CreateTableParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message("Table created", table.into_dto())),
    ))
}

/// Renumbers, renames or regroups a table.
///
/// # Access Control
/// - `Manage(Tables)`
///
/// # Returns
/// - `200 OK` - Updated table
/// - `400 Bad Request` - Table number already used
/// - `404 Not Found` - Table or group not found
#[utoipa::path(
    put,
    path = "/api/tables/{id}",
    tag = TABLE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    request_body = UpdateTableDto,
    responses(
        (status = 200, description = "Table updated", body = DataDto<TableDto>),
        (status = 400, description = "Duplicate table number", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Table not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_table(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTableDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Tables)])
        .await?;

    let table = TableService::new(&state.db)
        .update(tenant.company_id, id, UpdateTableParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(DataDto::with_message("Table updated", table.into_dto())),
    ))
}

/// Deletes a table.
///
/// # Access Control
/// - `Manage(Tables)`
#[utoipa::path(
    delete,
    path = "/api/tables/{id}",
    tag = TABLE_TAG,
    params(("id" = i32, Path, description = "Table ID")),
    responses(
        (status = 200, description = "Table deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Table not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_table(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Tables)])
        .await?;

    TableService::new(&state.db)
        .delete(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Table deleted"))))
}
