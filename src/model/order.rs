use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemDto {
    pub id: i32,
    pub order_id: i32,
    pub menu_item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub price_inr: f64,
    pub price_usd: f64,
    /// `active` or `cancelled`.
    pub item_status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub table_id: i32,
    pub table_number: i32,
    pub customer_id: Option<String>,
    pub staff_id: Option<i32>,
    pub total_amount_inr: f64,
    pub total_amount_usd: f64,
    pub currency: String,
    pub payment_method: String,
    pub order_status: String,
    pub payment_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<OrderItemDto>,
}

/// A line of a new order as the customer's cart submits it.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderItemDto {
    /// Menu item id.
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price_inr: f64,
    pub price_usd: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderDto {
    #[serde(default)]
    pub table_number: Option<i32>,
    #[serde(default)]
    pub items: Vec<CreateOrderItemDto>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateOrderStatusDto {
    pub order_status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CancelDto {
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub cancelled_by: Option<String>,
}

/// Filters accepted by `GET /api/orders`.
///
/// Dates are RFC 3339 timestamps or plain `YYYY-MM-DD` days; a plain `end_date`
/// includes the whole day.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct OrderQueryDto {
    pub status: Option<String>,
    pub table_number: Option<i32>,
    pub customer_id: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateFeedbackDto {
    pub order_id: i32,
    #[serde(default)]
    pub customer_id: Option<String>,
    pub rating: i32,
    #[serde(default)]
    pub comments: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeedbackDto {
    pub id: i32,
    pub order_id: i32,
    pub company_id: Option<i32>,
    pub customer_id: Option<String>,
    pub rating: i32,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}
