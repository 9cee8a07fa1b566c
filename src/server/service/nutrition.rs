//! Nutrition summaries generated by the Gemini REST API.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::{
    model::nutrition::{NutritionDto, NutritionRequestDto},
    server::error::AppError,
};

const GEMINI_MODEL: &str = "gemini-2.0-flash";
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const GEMINI_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize, Serialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Part {
    #[serde(default)]
    text: String,
}

fn build_prompt(request: &NutritionRequestDto) -> String {
    format!(
        "Generate nutritional information for a menu item with Name: '{}' and Description: '{}'.\n\
         Return ONLY a valid JSON object with exactly two keys:\n\
         - nutritional_info: A short string summarizing calories, protein, etc. (e.g., \"300 kcal, 10g Protein\")\n\
         - vitamins: A comma-separated string of vitamins (e.g., \"Vitamin A, Vitamin C\")\n\
         Do not include any markdown formatting or code blocks. Just the raw JSON string.",
        request.name,
        request.description.as_deref().unwrap_or_default()
    )
}

/// Parses the model's answer, tolerating Markdown code fences around the JSON.
pub fn parse_nutrition_text(text: &str) -> Result<NutritionDto, AppError> {
    let cleaned = text.replace("```json", "").replace("```", "");

    serde_json::from_str::<NutritionDto>(cleaned.trim()).map_err(|e| {
        AppError::BadGateway(format!("Failed to parse nutritional info: {}", e))
    })
}

pub struct NutritionService<'a> {
    http_client: &'a reqwest::Client,
    api_key: Option<&'a str>,
}

impl<'a> NutritionService<'a> {
    pub fn new(http_client: &'a reqwest::Client, api_key: Option<&'a str>) -> Self {
        Self {
            http_client,
            api_key,
        }
    }

    /// The key travels in a header so it never appears in the request URL.
    fn generate_request(
        &self,
        api_key: &str,
        request: &NutritionRequestDto,
    ) -> reqwest::RequestBuilder {
        let body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(request) }] }]
        });

        self.http_client
            .post(format!("{}/{}:generateContent", GEMINI_BASE_URL, GEMINI_MODEL))
            .header(GEMINI_KEY_HEADER, api_key)
            .json(&body)
    }

    /// Asks Gemini for a nutrition summary of a menu item.
    ///
    /// # Returns
    /// - `Ok(NutritionDto)` - Parsed summary
    /// - `Err(AppError::NotConfigured)` - No API key
    /// - `Err(AppError::BadGateway)` - Empty or unparsable answer
    /// - `Err(AppError::ReqwestErr)` - Request failed or returned an error status
    pub async fn generate(&self, request: &NutritionRequestDto) -> Result<NutritionDto, AppError> {
        let Some(api_key) = self.api_key else {
            return Err(AppError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        };

        tracing::info!("Generating nutritional info for '{}'", request.name);

        let response: GenerateContentResponse = self
            .generate_request(api_key, request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text: String = response
            .candidates
            .into_iter()
            .next()
            .map(|c| c.content.parts.into_iter().map(|p| p.text).collect())
            .unwrap_or_default();
        if text.trim().is_empty() {
            return Err(AppError::BadGateway(
                "Gemini returned an empty answer".to_string(),
            ));
        }

        tracing::debug!("Gemini answer: {}", text);

        parse_nutrition_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_json() {
        let dto = parse_nutrition_text(
            r#"{"nutritional_info":"300 kcal, 10g Protein","vitamins":"Vitamin A"}"#,
        )
        .unwrap();

        assert_eq!(dto.nutritional_info, "300 kcal, 10g Protein");
        assert_eq!(dto.vitamins, "Vitamin A");
    }

    #[test]
    fn strips_code_fences() {
        let text = "```json\n{\"nutritional_info\":\"120 kcal\",\"vitamins\":\"Vitamin C, Vitamin K\"}\n```";

        let dto = parse_nutrition_text(text).unwrap();

        assert_eq!(dto.nutritional_info, "120 kcal");
        assert_eq!(dto.vitamins, "Vitamin C, Vitamin K");
    }

    #[test]
    fn rejects_prose_as_bad_gateway() {
        let result = parse_nutrition_text("I cannot help with that.");

        assert!(matches!(result, Err(AppError::BadGateway(_))));
    }

    #[tokio::test]
    async fn missing_key_is_not_configured() {
        let client = reqwest::Client::new();
        let service = NutritionService::new(&client, None);

        let result = service
            .generate(&NutritionRequestDto {
                name: "Soup".to_string(),
                description: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::NotConfigured(msg)) if msg == "Gemini API key not configured"));
    }

    #[test]
    fn api_key_is_sent_as_header_not_query() {
        let client = reqwest::Client::new();
        let service = NutritionService::new(&client, Some("gm-secret"));

        let built = service
            .generate_request(
                "gm-secret",
                &NutritionRequestDto {
                    name: "Soup".to_string(),
                    description: None,
                },
            )
            .build()
            .unwrap();

        assert!(built.url().query().is_none());
        assert!(!built.url().as_str().contains("gm-secret"));
        assert_eq!(built.headers()[GEMINI_KEY_HEADER], "gm-secret");
    }

    #[test]
    fn prompt_names_the_item() {
        let prompt = build_prompt(&NutritionRequestDto {
            name: "Paneer Tikka".to_string(),
            description: Some("Grilled cottage cheese".to_string()),
        });

        assert!(prompt.contains("'Paneer Tikka'"));
        assert!(prompt.contains("'Grilled cottage cheese'"));
    }
}
