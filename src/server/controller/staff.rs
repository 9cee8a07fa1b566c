use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        staff::{SaveStaffDto, StaffDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::AuthTenant,
        },
        model::{role::Resource, staff::StaffParams},
        service::staff::StaffService,
        state::AppState,
    },
};

pub static STAFF_TAG: &str = "staff";

/// Lists the tenant's staff roster.
///
/// # Access Control
/// - `Manage(Staff)`
#[utoipa::path(
    get,
    path = "/api/staff",
    tag = STAFF_TAG,
    responses(
        (status = 200, description = "Staff of the tenant", body = DataDto<Vec<StaffDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_staff(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Staff)])
        .await?;

    let staff = StaffService::new(&state.db).get_all(tenant.scope()).await?;

    let dto: Vec<StaffDto> = staff.into_iter().map(StaffDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Adds a person to the staff roster. Roster entries are not login accounts.
///
/// # Access Control
/// - `Manage(Staff)`
///
/// # Returns
/// - `201 Created` - New staff member
/// - `400 Bad Request` - Name missing
/// - `403 Forbidden` - Caller may not manage staff
#[utoipa::path(
    post,
    path = "/api/staff",
    tag = STAFF_TAG,
    request_body = SaveStaffDto,
    responses(
        (status = 201, description = "Staff member created", body = DataDto<StaffDto>),
        (status = 400, description = "Name is required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_staff(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<SaveStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Staff)])
        .await?;

    let staff = StaffService::new(&state.db)
        .create(tenant.scope(), StaffParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(StaffDto::from(staff)))))
}

/// Replaces a staff member's details.
///
/// # Access Control
/// - `Manage(Staff)`
///
/// # Returns
/// - `200 OK` - Updated staff member
/// - `400 Bad Request` - Name missing
/// - `404 Not Found` - Staff member unknown or owned by another company
#[utoipa::path(
    put,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(("id" = i32, Path, description = "Staff member ID")),
    request_body = SaveStaffDto,
    responses(
        (status = 200, description = "Staff member updated", body = DataDto<StaffDto>),
        (status = 400, description = "Name is required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_staff(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<SaveStaffDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Staff)])
        .await?;

    let staff = StaffService::new(&state.db)
        .update(tenant.company_id, id, StaffParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(StaffDto::from(staff)))))
}

/// Removes a staff member from the roster.
///
/// # Access Control
/// - `Manage(Staff)`
#[utoipa::path(
    delete,
    path = "/api/staff/{id}",
    tag = STAFF_TAG,
    params(("id" = i32, Path, description = "Staff member ID")),
    responses(
        (status = 200, description = "Staff member deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Staff member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_staff(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Staff)])
        .await?;

    StaffService::new(&state.db)
        .delete(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Staff member deleted"))))
}
