use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        menu::{MenuItemDto, RecipeItemDto, SaveMenuItemDto, SaveRecipeDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::{AuthTenant, PublicTenant},
        },
        model::{
            menu::{MenuItemParams, RecipeParams},
            role::Resource,
        },
        service::menu::MenuService,
        state::AppState,
    },
};

pub static MENU_TAG: &str = "menu";

/// Lists the menu of the resolved tenant.
///
/// Public endpoint. Placeholder rows and invalid categories are never returned, and an
/// unresolved tenant gets an empty list rather than an error.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `tenant` - Company and optional branch resolved from the request
///
/// # Returns
/// - `200 OK` - Menu items ordered by category and name
/// - `404 Not Found` - Named company or branch does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/menu",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Menu of the resolved tenant, empty without one", body = DataDto<Vec<MenuItemDto>>),
        (status = 404, description = "Company or branch not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu(
    State(state): State<AppState>,
    PublicTenant(tenant): PublicTenant,
) -> Result<impl IntoResponse, AppError> {
    let items = MenuService::new(&state.db)
        .get_all(tenant.map(|t| t.scope()))
        .await?;

    let dto: Vec<MenuItemDto> = items.into_iter().map(MenuItemDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Fetches one menu item of the resolved tenant.
#[utoipa::path(
    get,
    path = "/api/menu/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item", body = DataDto<MenuItemDto>),
        (status = 404, description = "Menu item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_menu_item(
    State(state): State<AppState>,
    PublicTenant(tenant): PublicTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = MenuService::new(&state.db)
        .get_by_id(tenant.map(|t| t.scope()), id)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(MenuItemDto::from(item)))))
}

/// Adds a menu item.
///
/// # Access Control
/// - `Manage(Menu)` - Admins, staff without a custom role, or a role granting `menu`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` / `tenant` - Verified caller and company/branch scope
/// - `payload` - Name, prices in both currencies, category and optional details
///
/// # Returns
/// - `201 Created` - New menu item
/// - `400 Bad Request` - Missing name, invalid prices or the `add-new` category
/// - `403 Forbidden` - Caller may not manage the menu
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/menu",
    tag = MENU_TAG,
    request_body = SaveMenuItemDto,
    responses(
        (status = 201, description = "Menu item created", body = DataDto<MenuItemDto>),
        (status = 400, description = "Invalid menu item data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_menu_item(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<SaveMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Menu)])
        .await?;

    let item = MenuService::new(&state.db)
        .create(tenant.scope(), MenuItemParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message("Menu item created", MenuItemDto::from(item))),
    ))
}

/// Replaces a menu item's fields.
///
/// # Access Control
/// - `Manage(Menu)`
///
/// # Returns
/// - `200 OK` - Updated item
/// - `400 Bad Request` - Invalid menu item data
/// - `404 Not Found` - Item unknown or owned by another company
#[utoipa::path(
    put,
    path = "/api/menu/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    request_body = SaveMenuItemDto,
    responses(
        (status = 200, description = "Menu item updated", body = DataDto<MenuItemDto>),
        (status = 400, description = "Invalid menu item data", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Menu item not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_menu_item(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<SaveMenuItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Menu)])
        .await?;

    let item = MenuService::new(&state.db)
        .update(tenant.company_id, id, MenuItemParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DataDto::with_message("Menu item updated", MenuItemDto::from(item))),
    ))
}

/// Deletes a menu item that has never been ordered.
///
/// # Access Control
/// - `Manage(Menu)`
///
/// # Returns
/// - `200 OK` - Item deleted
/// - `400 Bad Request` - Item appears on past orders
/// - `404 Not Found` - Item unknown or owned by another company
#[utoipa::path(
    delete,
    path = "/api/menu/{id}",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item deleted", body = MessageDto),
        (status = 400, description = "Menu item has been ordered", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Menu item not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_menu_item(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Menu)])
        .await?;

    MenuService::new(&state.db)
        .delete(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Menu item deleted"))))
}

/// Lists the ingredients a menu item consumes.
///
/// # Access Control
/// - `Manage(Menu)`
#[utoipa::path(
    get,
    path = "/api/menu/{id}/recipe",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Recipe lines of the item", body = DataDto<Vec<RecipeItemDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Menu item not found or access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Menu)])
        .await?;

    let lines = MenuService::new(&state.db)
        .get_recipe(tenant.company_id, id)
        .await?;

    let dto: Vec<RecipeItemDto> = lines.into_iter().map(RecipeItemDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Replaces the whole recipe of a menu item.
///
/// # Access Control
/// - `Manage(Menu)` and `Manage(Inventory)`
///
/// # Arguments
/// - `id` - Menu item ID
/// - `payload` - Ingredient IDs with the quantity used per serving
///
/// # Returns
/// - `200 OK` - The stored recipe lines
/// - `400 Bad Request` - Non-positive quantity or a repeated ingredient
/// - `404 Not Found` - Menu item or an ingredient outside the company
#[utoipa::path(
    put,
    path = "/api/menu/{id}/recipe",
    tag = MENU_TAG,
    params(("id" = i32, Path, description = "Menu item ID")),
    request_body = SaveRecipeDto,
    responses(
        (status = 200, description = "Recipe replaced", body = DataDto<Vec<RecipeItemDto>>),
        (status = 400, description = "Invalid recipe line", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Menu item or ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn replace_recipe(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<SaveRecipeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Menu), Permission::Manage(Resource::Inventory)])
        .await?;

    let lines = MenuService::new(&state.db)
        .replace_recipe(tenant.company_id, id, RecipeParams::from_dto(payload)?)
        .await?;

    let dto: Vec<RecipeItemDto> = lines.into_iter().map(RecipeItemDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}
