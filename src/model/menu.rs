use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MenuItemDto {
    pub id: i32,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub price_inr: f64,
    pub price_usd: f64,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub nutritional_info: Option<String>,
    pub vitamins: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating or replacing a menu item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SaveMenuItemDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price_inr: f64,
    #[serde(default)]
    pub price_usd: f64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Defaults to `true`.
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub nutritional_info: Option<String>,
    #[serde(default)]
    pub vitamins: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeItemDto {
    pub id: i32,
    pub menu_item_id: i32,
    pub ingredient_id: i32,
    pub quantity: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeLineDto {
    pub ingredient_id: i32,
    pub quantity: f64,
}

/// Replaces the whole recipe of a menu item.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SaveRecipeDto {
    #[serde(default)]
    pub items: Vec<RecipeLineDto>,
}
