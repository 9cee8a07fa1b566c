use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        nutrition::{NutritionDto, NutritionRequestDto},
    },
    server::{
        error::AppError, middleware::auth::AuthUser, service::nutrition::NutritionService,
        state::AppState,
    },
};

pub static NUTRITION_TAG: &str = "nutrition";

/// Asks Gemini for a nutrition summary of a menu item.
///
/// # Access Control
/// - Any valid token
///
/// # Returns
/// - `200 OK` - Nutrition summary and vitamins
/// - `401 Unauthorized` - Missing token
/// - `500 Internal Server Error` - Gemini API key not configured
/// - `502 Bad Gateway` - Gemini answered with something unusable
#[utoipa::path(
    post,
    path = "/api/ai/nutrition",
    tag = NUTRITION_TAG,
    request_body = NutritionRequestDto,
    responses(
        (status = 200, description = "Generated nutrition summary", body = DataDto<NutritionDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 500, description = "Gemini API key not configured", body = ErrorDto),
        (status = 502, description = "Unusable answer from Gemini", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn generate_nutrition(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<NutritionRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let nutrition = NutritionService::new(&state.http_client, state.config.gemini_api_key.as_deref())
        .generate(&payload)
        .await?;

    Ok((StatusCode::OK, Json(DataDto::new(nutrition))))
}
