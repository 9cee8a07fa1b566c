//! Menu item and recipe parameter models.

use crate::{
    model::menu::{MenuItemDto, RecipeItemDto, SaveMenuItemDto, SaveRecipeDto},
    server::error::AppError,
};

/// Placeholder value some admin UIs submit from the "add new category" option.
pub const ADD_NEW_CATEGORY: &str = "add-new";

/// Name of rows that only ever existed to keep an empty category alive.
pub const CATEGORY_PLACEHOLDER: &str = "[Category Placeholder]";

/// Trims a category and rejects empty or `add-new` values.
///
/// # Returns
/// - `Ok(String)` - Trimmed category
/// - `Err(AppError::BadRequest)` - "Please select a valid category"
pub fn validate_category(category: Option<&str>) -> Result<String, AppError> {
    let category = category.map(str::trim).unwrap_or_default();
    if category.is_empty() || category.eq_ignore_ascii_case(ADD_NEW_CATEGORY) {
        return Err(AppError::BadRequest(
            "Please select a valid category".to_string(),
        ));
    }

    Ok(category.to_string())
}

/// Whether a stored category may be listed to customers.
pub fn is_listable_category(category: &str) -> bool {
    let category = category.trim();
    !category.is_empty() && !category.eq_ignore_ascii_case(ADD_NEW_CATEGORY)
}

/// Validated menu item fields for create and update.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemParams {
    pub name: String,
    pub description: Option<String>,
    pub price_inr: f64,
    pub price_usd: f64,
    pub category: String,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub nutritional_info: Option<String>,
    pub vitamins: Option<String>,
}

impl MenuItemParams {
    pub fn from_dto(dto: SaveMenuItemDto) -> Result<Self, AppError> {
        let category = validate_category(dto.category.as_deref())?;
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        Ok(Self {
            name,
            description: dto.description,
            price_inr: dto.price_inr,
            price_usd: dto.price_usd,
            category,
            image_url: dto.image_url,
            is_available: dto.is_available.unwrap_or(true),
            nutritional_info: dto.nutritional_info,
            vitamins: dto.vitamins,
        })
    }
}

impl From<entity::menu_item::Model> for MenuItemDto {
    fn from(item: entity::menu_item::Model) -> Self {
        Self {
            id: item.id,
            company_id: item.company_id,
            branch_id: item.branch_id,
            name: item.name,
            description: item.description,
            price_inr: item.price_inr,
            price_usd: item.price_usd,
            category: item.category,
            image_url: item.image_url,
            is_available: item.is_available,
            nutritional_info: item.nutritional_info,
            vitamins: item.vitamins,
            created_at: item.created_at,
        }
    }
}

/// A recipe as `(ingredient_id, quantity)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeParams {
    pub lines: Vec<(i32, f64)>,
}

impl RecipeParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - A quantity is not positive or an ingredient repeats
    pub fn from_dto(dto: SaveRecipeDto) -> Result<Self, AppError> {
        let mut lines: Vec<(i32, f64)> = Vec::with_capacity(dto.items.len());
        for line in dto.items {
            if line.quantity <= 0.0 {
                return Err(AppError::BadRequest(
                    "Recipe quantities must be positive".to_string(),
                ));
            }
            if lines.iter().any(|(id, _)| *id == line.ingredient_id) {
                return Err(AppError::BadRequest(format!(
                    "Ingredient {} appears twice in the recipe",
                    line.ingredient_id
                )));
            }
            lines.push((line.ingredient_id, line.quantity));
        }

        Ok(Self { lines })
    }
}

impl From<entity::recipe_item::Model> for RecipeItemDto {
    fn from(item: entity::recipe_item::Model) -> Self {
        Self {
            id: item.id,
            menu_item_id: item.menu_item_id,
            ingredient_id: item.ingredient_id,
            quantity: item.quantity,
        }
    }
}
