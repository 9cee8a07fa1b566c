use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        order::{CancelDto, CreateOrderDto, OrderDto, OrderQueryDto, UpdateOrderStatusDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::{AuthTenant, PublicTenant},
        },
        model::{
            order::{CreateOrderParams, OrderFilter, OrderStatus},
            role::Resource,
        },
        service::order::OrderService,
        state::AppState,
    },
};

pub static ORDER_TAG: &str = "order";

/// Lists the tenant's orders with their items, newest first.
///
/// Filters are optional and combine: status, table number, customer and a creation date
/// range. A branch-scoped tenant only sees its own branch.
///
/// # Access Control
/// - `Manage(Orders)` - Admins, staff without a custom role, or a role granting `orders`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` / `tenant` - Verified caller and the resolved company scope
/// - `query` - Optional status, table number, customer and date filters
///
/// # Returns
/// - `200 OK` - Matching orders with their items
/// - `400 Bad Request` - Unknown status or malformed date
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Caller may not manage orders
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    params(OrderQueryDto),
    responses(
        (status = 200, description = "Orders newest first, with items", body = DataDto<Vec<OrderDto>>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Query(query): Query<OrderQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Orders)])
        .await?;

    let filter = OrderFilter::from_dto(query)?;
    let orders = OrderService::new(&state.db, &state.notifier)
        .get_filtered(tenant.scope(), &filter)
        .await?;

    let dto: Vec<OrderDto> = orders.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Places an order from a table's QR menu.
///
/// Public endpoint: the company comes from the `X-Company-Slug` header or the host. Prices
/// are taken from the submitted lines and the new order is pushed to the company's
/// WebSocket room as `new-order`.
///
/// # Arguments
/// - `state` - Application state containing the database connection and notifier
/// - `tenant` - Company resolved from the request, if any
/// - `payload` - Table number, lines and optional customer details
///
/// # Returns
/// - `201 Created` - Order with its items and totals
/// - `400 Bad Request` - Empty order, invalid line or no company context
/// - `404 Not Found` - Unknown company or table
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Order placed", body = DataDto<OrderDto>),
        (status = 400, description = "Invalid order or no company context", body = ErrorDto),
        (status = 404, description = "Company or table not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    PublicTenant(tenant): PublicTenant,
    Json(payload): Json<CreateOrderDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateOrderParams::from_dto(payload)?;

    let order = OrderService::new(&state.db, &state.notifier)
        .create(tenant, params)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message("Order placed successfully", order.into_dto())),
    ))
}

/// Moves an order to its next status.
///
/// Only forward transitions along the kitchen flow are accepted; the result is broadcast as
/// `order-status-updated`.
///
/// # Access Control
/// - `Manage(Orders)`
///
/// # Returns
/// - `200 OK` - Updated order
/// - `400 Bad Request` - Unknown status
/// - `404 Not Found` - Order unknown or owned by another company
/// - `409 Conflict` - Transition not allowed from the current status
#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order status updated", body = DataDto<OrderDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Orders)])
        .await?;

    let next = payload.order_status.parse::<OrderStatus>()?;
    let order = OrderService::new(&state.db, &state.notifier)
        .update_status(tenant.company_id, id, next)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DataDto::with_message("Order status updated", order.into_dto())),
    ))
}

/// Cancels a whole order and logs who cancelled it and why.
///
/// # Access Control
/// - `Manage(Orders)`
///
/// # Returns
/// - `200 OK` - Cancelled order
/// - `404 Not Found` - Order unknown or owned by another company
/// - `409 Conflict` - Order already served, paid or cancelled
#[utoipa::path(
    post,
    path = "/api/orders/{id}/cancel",
    tag = ORDER_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = CancelDto,
    responses(
        (status = 200, description = "Order cancelled", body = DataDto<OrderDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 409, description = "Order can no longer be cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<CancelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Orders)])
        .await?;

    let order = OrderService::new(&state.db, &state.notifier)
        .cancel(tenant.company_id, id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DataDto::with_message("Order cancelled", order.into_dto())),
    ))
}

/// Cancels a single line of an order and recomputes both currency totals.
///
/// Runs in one transaction so the line, the cancellation log and the totals change together.
///
/// # Access Control
/// - `Manage(Orders)`
///
/// # Arguments
/// - `id` - Order ID
/// - `item_id` - Order item ID within that order
/// - `payload` - Reason and who cancelled
///
/// # Returns
/// - `200 OK` - Order with recomputed totals
/// - `404 Not Found` - Order or item not found
/// - `409 Conflict` - Order is final or the item is already cancelled
#[utoipa::path(
    post,
    path = "/api/orders/{id}/items/{item_id}/cancel",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID"),
        ("item_id" = i32, Path, description = "Order item ID")
    ),
    request_body = CancelDto,
    responses(
        (status = 200, description = "Item cancelled, totals recomputed", body = DataDto<OrderDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Order or item not found", body = ErrorDto),
        (status = 409, description = "Order is final or item already cancelled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn cancel_order_item(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path((id, item_id)): Path<(i32, i32)>,
    Json(payload): Json<CancelDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Orders)])
        .await?;

    let order = OrderService::new(&state.db, &state.notifier)
        .cancel_item(tenant.company_id, id, item_id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DataDto::with_message("Order item cancelled", order.into_dto())),
    ))
}
