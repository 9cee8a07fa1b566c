//! Ingredient and waste parameter models.

use crate::{
    model::ingredient::{IngredientDto, RecordWasteDto, SaveIngredientDto, WasteLogDto},
    server::error::AppError,
};

/// Validated ingredient fields. Stock and threshold accept either spelling.
#[derive(Debug, Clone, PartialEq)]
pub struct IngredientParams {
    pub name: String,
    pub unit: String,
    pub current_stock: f64,
    pub min_stock_level: f64,
    pub cost_per_unit: f64,
}

impl IngredientParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - "Name is required" or "Unit is required"
    pub fn from_dto(dto: SaveIngredientDto) -> Result<Self, AppError> {
        let name = dto
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("Name is required".to_string()))?;
        let unit = dto
            .unit
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::BadRequest("Unit is required".to_string()))?;

        Ok(Self {
            name,
            unit,
            current_stock: dto.quantity.or(dto.current_stock).unwrap_or(0.0),
            min_stock_level: dto.threshold.or(dto.min_stock_level).unwrap_or(0.0),
            cost_per_unit: dto.cost_per_unit.unwrap_or(0.0),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WasteParams {
    pub quantity: f64,
    pub reason: Option<String>,
}

impl WasteParams {
    pub fn from_dto(dto: RecordWasteDto) -> Result<Self, AppError> {
        if !(dto.quantity > 0.0) {
            return Err(AppError::BadRequest(
                "Waste quantity must be positive".to_string(),
            ));
        }

        Ok(Self {
            quantity: dto.quantity,
            reason: dto.reason.filter(|r| !r.trim().is_empty()),
        })
    }
}

impl From<entity::ingredient::Model> for IngredientDto {
    fn from(ingredient: entity::ingredient::Model) -> Self {
        Self {
            id: ingredient.id,
            company_id: ingredient.company_id,
            branch_id: ingredient.branch_id,
            name: ingredient.name,
            current_stock: ingredient.current_stock,
            quantity: ingredient.current_stock,
            unit: ingredient.unit,
            min_stock_level: ingredient.min_stock_level,
            threshold: ingredient.min_stock_level,
            cost_per_unit: ingredient.cost_per_unit,
            created_at: ingredient.created_at,
            updated_at: ingredient.updated_at,
        }
    }
}

impl From<entity::waste_log::Model> for WasteLogDto {
    fn from(waste: entity::waste_log::Model) -> Self {
        Self {
            id: waste.id,
            ingredient_id: waste.ingredient_id,
            quantity: waste.quantity,
            reason: waste.reason,
            created_at: waste.created_at,
        }
    }
}
