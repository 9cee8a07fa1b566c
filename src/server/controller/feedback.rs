use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{DataDto, ErrorDto},
        order::{CreateFeedbackDto, FeedbackDto},
    },
    server::{
        error::AppError, middleware::tenant::PublicTenant, service::feedback::FeedbackService,
        state::AppState,
    },
};

pub static FEEDBACK_TAG: &str = "feedback";

/// Stores a customer's rating for an order.
///
/// Public endpoint. When a tenant is resolved the order must belong to it.
///
/// # Returns
/// - `201 Created` - Stored feedback
/// - `400 Bad Request` - Rating outside 1 to 5
/// - `404 Not Found` - Order unknown or owned by another company
#[utoipa::path(
    post,
    path = "/api/feedback",
    tag = FEEDBACK_TAG,
    request_body = CreateFeedbackDto,
    responses(
        (status = 201, description = "Feedback stored", body = DataDto<FeedbackDto>),
        (status = 400, description = "Rating outside 1 to 5", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    PublicTenant(tenant): PublicTenant,
    Json(payload): Json<CreateFeedbackDto>,
) -> Result<impl IntoResponse, AppError> {
    let feedback = FeedbackService::new(&state.db)
        .create(tenant, payload)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(DataDto::with_message(
            "Thank you for your feedback",
            FeedbackDto::from(feedback),
        )),
    ))
}
