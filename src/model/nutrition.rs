use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NutritionRequestDto {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Generated nutrition summary, e.g. `"300 kcal, 10g Protein"` / `"Vitamin A, Vitamin C"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionDto {
    pub nutritional_info: String,
    pub vitamins: String,
}
