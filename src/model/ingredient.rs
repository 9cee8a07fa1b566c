use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Ingredient with its stock level.
///
/// `quantity` and `threshold` mirror `current_stock` and `min_stock_level`; clients
/// written against either spelling read the same values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IngredientDto {
    pub id: i32,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub name: String,
    pub current_stock: f64,
    pub quantity: f64,
    pub unit: String,
    pub min_stock_level: f64,
    pub threshold: f64,
    pub cost_per_unit: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create and update payload. `quantity` wins over `current_stock`, `threshold`
/// over `min_stock_level`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SaveIngredientDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub current_stock: Option<f64>,
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub min_stock_level: Option<f64>,
    #[serde(default)]
    pub cost_per_unit: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecordWasteDto {
    pub quantity: f64,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WasteLogDto {
    pub id: i32,
    pub ingredient_id: i32,
    pub quantity: f64,
    pub reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Result of logging waste: the log row and the ingredient after the decrement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WasteRecordedDto {
    pub waste: WasteLogDto,
    pub ingredient: IngredientDto,
}
