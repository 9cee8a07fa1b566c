use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::health::HealthDto,
    server::{service::health::HealthService, state::AppState},
};

pub static HEALTH_TAG: &str = "health";

/// Pings the database and re-runs the schema reconciler.
///
/// Answers 500 only when the database is unreachable.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Database reachable", body = HealthDto),
        (status = 500, description = "Database connection failed", body = HealthDto)
    ),
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let health = HealthService::new(&state.db).check().await;

    let status = if health.status == "ok" {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(health))
}
