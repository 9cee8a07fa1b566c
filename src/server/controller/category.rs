use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        category::{CategoryDto, CreateCategoryDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::{AuthTenant, PublicTenant},
        },
        model::role::Resource,
        service::category::CategoryService,
        state::AppState,
    },
};

pub static CATEGORY_TAG: &str = "category";

/// Lists the menu categories in use by the resolved tenant.
///
/// Public endpoint. Returns an empty list when no company can be resolved.
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    responses(
        (status = 200, description = "Sorted category names", body = DataDto<Vec<String>>),
        (status = 404, description = "Company not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    PublicTenant(tenant): PublicTenant,
) -> Result<impl IntoResponse, AppError> {
    let categories = CategoryService::new(&state.db)
        .get_all(tenant.map(|t| t.scope()))
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(categories))))
}

/// Validates a new category name.
///
/// Categories have no table of their own, so nothing is stored until a menu item uses the
/// name.
///
/// # Access Control
/// - `Manage(Menu)`
///
/// # Returns
/// - `201 Created` - Accepted name
/// - `400 Bad Request` - Empty, reserved or already used name
#[utoipa::path(
    post,
    path = "/api/categories",
    tag = CATEGORY_TAG,
    request_body = CreateCategoryDto,
    responses(
        (status = 201, description = "Category accepted", body = DataDto<CategoryDto>),
        (status = 400, description = "Missing, reserved or existing name", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_category(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<CreateCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Menu)])
        .await?;

    let name = CategoryService::new(&state.db)
        .create(tenant.company_id, payload.name)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message("Category created", CategoryDto { name })),
    ))
}

/// Deletes a category that no menu item uses.
///
/// # Access Control
/// - `Manage(Menu)`
///
/// # Arguments
/// - `name` - Category name, URL-encoded
///
/// # Returns
/// - `200 OK` - Category and its placeholder rows removed
/// - `400 Bad Request` - Items still use the category
#[utoipa::path(
    delete,
    path = "/api/categories/{name}",
    tag = CATEGORY_TAG,
    params(("name" = String, Path, description = "Category name")),
    responses(
        (status = 200, description = "Category deleted", body = MessageDto),
        (status = 400, description = "Category still used by menu items", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Menu)])
        .await?;

    CategoryService::new(&state.db)
        .delete(tenant.company_id, &name)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Category deleted"))))
}
