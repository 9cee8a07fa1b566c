use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        support::{CreateTicketDto, SupportTicketDto, TicketQueryDto, UpdateTicketDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::AuthTenant,
        },
        model::{
            role::Resource,
            support::{CreateTicketParams, TicketStatus, UpdateTicketParams},
        },
        service::support::SupportService,
        state::AppState,
    },
};

pub static SUPPORT_TAG: &str = "support";

/// Lists the company's support tickets, newest first.
///
/// # Access Control
/// - `Manage(Support)`
///
/// # Arguments
/// - `query` - Optional status filter
///
/// # Returns
/// - `200 OK` - Tickets
/// - `400 Bad Request` - Unknown status
/// - `403 Forbidden` - Caller may not manage support
#[utoipa::path(
    get,
    path = "/api/support-tickets",
    tag = SUPPORT_TAG,
    params(TicketQueryDto),
    responses(
        (status = 200, description = "Tickets newest first", body = DataDto<Vec<SupportTicketDto>>),
        (status = 400, description = "Invalid status filter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Query(query): Query<TicketQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Support)])
        .await?;

    let status = query
        .status
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::parse::<TicketStatus>)
        .transpose()?;
    let tickets = SupportService::new(&state.db)
        .get_all(tenant.company_id, status)
        .await?;

    let dto: Vec<SupportTicketDto> = tickets.into_iter().map(SupportTicketDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Fetches one support ticket.
///
/// # Access Control
/// - `Manage(Support)`
#[utoipa::path(
    get,
    path = "/api/support-tickets/{id}",
    tag = SUPPORT_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket", body = DataDto<SupportTicketDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Support)])
        .await?;

    let ticket = SupportService::new(&state.db)
        .get_by_id(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(SupportTicketDto::from(ticket)))))
}

/// Opens a support ticket on behalf of the caller.
///
/// # Access Control
/// - `Manage(Support)`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` / `tenant` - Verified caller, recorded as the ticket author, and company scope
/// - `payload` - Subject, description and optional priority (defaults to `medium`)
///
/// # Returns
/// - `201 Created` - New open ticket
/// - `400 Bad Request` - Subject or description missing, or an unknown priority
/// - `403 Forbidden` - Caller may not manage support
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/support-tickets",
    tag = SUPPORT_TAG,
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket opened", body = DataDto<SupportTicketDto>),
        (status = 400, description = "Missing subject or description, invalid priority", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<CreateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Support)])
        .await?;

    let ticket = SupportService::new(&state.db)
        .create(tenant.company_id, user.id, CreateTicketParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message(
            "Support ticket created",
            SupportTicketDto::from(ticket),
        )),
    ))
}

/// Applies a partial update to a ticket.
///
/// A closed ticket keeps its status; other fields can still change.
///
/// # Access Control
/// - `Manage(Support)`
///
/// # Returns
/// - `200 OK` - Updated ticket
/// - `400 Bad Request` - Unknown priority or status
/// - `404 Not Found` - Ticket unknown or owned by another company
/// - `409 Conflict` - Attempt to reopen a closed ticket
#[utoipa::path(
    put,
    path = "/api/support-tickets/{id}",
    tag = SUPPORT_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = DataDto<SupportTicketDto>),
        (status = 400, description = "Invalid priority or status", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 409, description = "Closed tickets cannot be reopened", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Support)])
        .await?;

    let ticket = SupportService::new(&state.db)
        .update(tenant.company_id, id, UpdateTicketParams::from_dto(payload)?)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(SupportTicketDto::from(ticket)))))
}

/// Deletes a support ticket.
///
/// # Access Control
/// - `Manage(Support)`
#[utoipa::path(
    delete,
    path = "/api/support-tickets/{id}",
    tag = SUPPORT_TAG,
    params(("id" = i32, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Support)])
        .await?;

    SupportService::new(&state.db)
        .delete(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Ticket deleted"))))
}
