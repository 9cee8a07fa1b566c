use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{DataDto, ErrorDto, MessageDto},
        ingredient::{
            IngredientDto, RecordWasteDto, SaveIngredientDto, WasteLogDto, WasteRecordedDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            tenant::AuthTenant,
        },
        model::{
            inventory::{IngredientParams, WasteParams},
            role::Resource,
        },
        service::inventory::InventoryService,
        state::AppState,
    },
};

pub static INGREDIENT_TAG: &str = "ingredient";

/// Lists the tenant's ingredients by name.
///
/// # Access Control
/// - `Manage(Inventory)`
#[utoipa::path(
    get,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    responses(
        (status = 200, description = "Ingredients of the tenant", body = DataDto<Vec<IngredientDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_ingredients(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Inventory)])
        .await?;

    let ingredients = InventoryService::new(&state.db)
        .get_all(tenant.scope())
        .await?;

    let dto: Vec<IngredientDto> = ingredients.into_iter().map(IngredientDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Lists ingredients whose stock is at or below their minimum level.
///
/// # Access Control
/// - `Manage(Inventory)`
///
/// # Returns
/// - `200 OK` - Ingredients needing a reorder
/// - `401 Unauthorized` - Missing token
/// - `403 Forbidden` - Caller may not manage inventory
#[utoipa::path(
    get,
    path = "/api/ingredients/low-stock",
    tag = INGREDIENT_TAG,
    responses(
        (status = 200, description = "Ingredients at or below their threshold", body = DataDto<Vec<IngredientDto>>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_low_stock(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Inventory)])
        .await?;

    let ingredients = InventoryService::new(&state.db)
        .get_low_stock(tenant.scope())
        .await?;

    let dto: Vec<IngredientDto> = ingredients.into_iter().map(IngredientDto::from).collect();

    Ok((StatusCode::OK, Json(DataDto::new(dto))))
}

/// Creates an ingredient in the tenant's scope.
///
/// # Access Control
/// - `Manage(Inventory)` - Admins, staff without a custom role, or a role granting `inventory`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `claims` / `tenant` - Verified caller and company/branch scope
/// - `payload` - Name, unit, current stock, minimum level and cost per unit
///
/// # Returns
/// - `201 Created` - New ingredient
/// - `400 Bad Request` - Name or unit missing
/// - `403 Forbidden` - Caller may not manage inventory
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/ingredients",
    tag = INGREDIENT_TAG,
    request_body = SaveIngredientDto,
    responses(
        (status = 201, description = "Ingredient created", body = DataDto<IngredientDto>),
        (status = 400, description = "Name and unit are required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_ingredient(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Json(payload): Json<SaveIngredientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Inventory)])
        .await?;

    let ingredient = InventoryService::new(&state.db)
        .create(tenant.scope(), IngredientParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message(
            "Ingredient added",
            IngredientDto::from(ingredient),
        )),
    ))
}

/// Replaces an ingredient's fields.
///
/// # Access Control
/// - `Manage(Inventory)`
///
/// # Returns
/// - `200 OK` - Updated ingredient
/// - `400 Bad Request` - Name or unit missing
/// - `404 Not Found` - Ingredient unknown or owned by another company
#[utoipa::path(
    put,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    request_body = SaveIngredientDto,
    responses(
        (status = 200, description = "Ingredient updated", body = DataDto<IngredientDto>),
        (status = 400, description = "Name and unit are required", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_ingredient(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<SaveIngredientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Inventory)])
        .await?;

    let ingredient = InventoryService::new(&state.db)
        .update(tenant.company_id, id, IngredientParams::from_dto(payload)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(DataDto::with_message(
            "Ingredient updated",
            IngredientDto::from(ingredient),
        )),
    ))
}

/// Deletes an ingredient with its recipe lines and waste entries in one transaction.
///
/// # Access Control
/// - `Manage(Inventory)`
#[utoipa::path(
    delete,
    path = "/api/ingredients/{id}",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    responses(
        (status = 200, description = "Ingredient, its recipe lines and waste log deleted", body = MessageDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_ingredient(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Inventory)])
        .await?;

    InventoryService::new(&state.db)
        .delete(tenant.company_id, id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Ingredient deleted"))))
}

/// Logs wasted stock and lowers the ingredient's current stock, never below zero.
///
/// # Access Control
/// - `Manage(Inventory)`
///
/// # Arguments
/// - `id` - Ingredient ID
/// - `payload` - Positive quantity and an optional reason
///
/// # Returns
/// - `201 Created` - Waste entry and the updated ingredient
/// - `400 Bad Request` - Quantity not positive
/// - `404 Not Found` - Ingredient unknown or owned by another company
#[utoipa::path(
    post,
    path = "/api/ingredients/{id}/waste",
    tag = INGREDIENT_TAG,
    params(("id" = i32, Path, description = "Ingredient ID")),
    request_body = RecordWasteDto,
    responses(
        (status = 201, description = "Waste logged and stock decremented", body = DataDto<WasteRecordedDto>),
        (status = 400, description = "Quantity must be positive", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Ingredient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn record_waste(
    State(state): State<AppState>,
    AuthTenant { claims, tenant }: AuthTenant,
    Path(id): Path<i32>,
    Json(payload): Json<RecordWasteDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Manage(Resource::Inventory)])
        .await?;

    let (waste, ingredient) = InventoryService::new(&state.db)
        .record_waste(tenant.company_id, id, WasteParams::from_dto(payload)?)
        .await?;

    let dto = WasteRecordedDto {
        waste: WasteLogDto::from(waste),
        ingredient: IngredientDto::from(ingredient),
    };

    Ok((StatusCode::CREATED, Json(DataDto::new(dto))))
}
