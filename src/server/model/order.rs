//! Order lifecycle and order parameter models.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::order::{CreateOrderDto, FeedbackDto, OrderDto, OrderItemDto, OrderQueryDto},
    server::{error::AppError, util::parse::parse_date_bound},
};

/// Status of an order in the kitchen/payment lifecycle.
///
/// Legal moves:
///
/// ```text
/// pending   -> preparing | paid | cancelled
/// preparing -> ready | cancelled
/// ready     -> served | cancelled
/// served    -> paid
/// ```
///
/// `paid` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Served,
    Paid,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Served => "served",
            Self::Paid => "paid",
            Self::Cancelled => "cancelled",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Paid | Self::Cancelled)
    }

    pub fn can_transition_to(&self, next: OrderStatus) -> bool {
        use OrderStatus::*;

        matches!(
            (self, next),
            (Pending, Preparing | Paid | Cancelled)
                | (Preparing, Ready | Cancelled)
                | (Ready, Served | Cancelled)
                | (Served, Paid)
        )
    }

    /// Validates a move from `current` (as stored) to `next`.
    ///
    /// # Returns
    /// - `Ok(OrderStatus)` - The new status
    /// - `Err(AppError::Conflict)` - Move not allowed, or the stored status is unknown
    pub fn transition(current: &str, next: OrderStatus) -> Result<OrderStatus, AppError> {
        let conflict = || {
            AppError::Conflict(format!(
                "Cannot change order status from {} to {}",
                current,
                next.as_str()
            ))
        };

        let current = current.parse::<OrderStatus>().map_err(|_| conflict())?;
        if current.can_transition_to(next) {
            Ok(next)
        } else {
            Err(conflict())
        }
    }
}

impl FromStr for OrderStatus {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "served" => Ok(Self::Served),
            "paid" => Ok(Self::Paid),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(AppError::BadRequest(format!("Invalid order status: {}", value))),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    /// Cash is settled at the table; every other method is paid when ordering.
    pub fn for_method(payment_method: &str) -> Self {
        if payment_method.eq_ignore_ascii_case("cash") {
            Self::Pending
        } else {
            Self::Paid
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Active,
    Cancelled,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Order row together with its line items.
#[derive(Debug, Clone)]
pub struct OrderWithItems {
    pub order: entity::order::Model,
    pub items: Vec<entity::order_item::Model>,
}

impl OrderWithItems {
    pub fn into_dto(self) -> OrderDto {
        let order = self.order;

        OrderDto {
            id: order.id,
            company_id: order.company_id,
            branch_id: order.branch_id,
            table_id: order.table_id,
            table_number: order.table_number,
            customer_id: order.customer_id,
            staff_id: order.staff_id,
            total_amount_inr: order.total_amount_inr,
            total_amount_usd: order.total_amount_usd,
            currency: order.currency,
            payment_method: order.payment_method,
            order_status: order.order_status,
            payment_status: order.payment_status,
            created_at: order.created_at,
            updated_at: order.updated_at,
            items: self.items.into_iter().map(OrderItemDto::from).collect(),
        }
    }
}

impl From<entity::order_item::Model> for OrderItemDto {
    fn from(item: entity::order_item::Model) -> Self {
        Self {
            id: item.id,
            order_id: item.order_id,
            menu_item_id: item.menu_item_id,
            item_name: item.item_name,
            quantity: item.quantity,
            price_inr: item.price_inr,
            price_usd: item.price_usd,
            item_status: item.item_status,
        }
    }
}

impl From<entity::order_feedback::Model> for FeedbackDto {
    fn from(feedback: entity::order_feedback::Model) -> Self {
        Self {
            id: feedback.id,
            order_id: feedback.order_id,
            company_id: feedback.company_id,
            customer_id: feedback.customer_id,
            rating: feedback.rating,
            comments: feedback.comments,
            created_at: feedback.created_at,
        }
    }
}

/// One validated cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    pub menu_item_id: i32,
    pub name: String,
    pub quantity: i32,
    pub price_inr: f64,
    pub price_usd: f64,
}

/// Validated payload for placing an order.
#[derive(Debug, Clone)]
pub struct CreateOrderParams {
    pub table_number: i32,
    pub lines: Vec<OrderLine>,
    pub currency: String,
    pub payment_method: String,
    pub customer_id: Option<String>,
}

impl CreateOrderParams {
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Table number missing, no items, or a quantity below 1
    pub fn from_dto(dto: CreateOrderDto) -> Result<Self, AppError> {
        let Some(table_number) = dto.table_number else {
            return Err(AppError::BadRequest(
                "Table number and items are required".to_string(),
            ));
        };
        if dto.items.is_empty() {
            return Err(AppError::BadRequest(
                "Table number and items are required".to_string(),
            ));
        }

        let mut lines = Vec::with_capacity(dto.items.len());
        for item in dto.items {
            if item.quantity < 1 {
                return Err(AppError::BadRequest(format!(
                    "Invalid quantity for {}",
                    item.name
                )));
            }
            lines.push(OrderLine {
                menu_item_id: item.id,
                name: item.name,
                quantity: item.quantity,
                price_inr: item.price_inr,
                price_usd: item.price_usd,
            });
        }

        Ok(Self {
            table_number,
            lines,
            currency: dto.currency.unwrap_or_else(|| "INR".to_string()),
            payment_method: dto.payment_method.unwrap_or_else(|| "cash".to_string()),
            customer_id: dto.customer_id.filter(|c| !c.trim().is_empty()),
        })
    }
}

/// Parsed `GET /api/orders` filters.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub table_number: Option<i32>,
    pub customer_id: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl OrderFilter {
    pub fn from_dto(dto: OrderQueryDto) -> Result<Self, AppError> {
        let status = match dto.status.as_deref() {
            None | Some("") | Some("all") => None,
            Some(s) => Some(s.parse::<OrderStatus>()?),
        };

        Ok(Self {
            status,
            table_number: dto.table_number,
            customer_id: dto.customer_id.filter(|c| !c.is_empty()),
            start: dto
                .start_date
                .as_deref()
                .map(|v| parse_date_bound("start_date", v, false))
                .transpose()?,
            end: dto
                .end_date
                .as_deref()
                .map(|v| parse_date_bound("end_date", v, true))
                .transpose()?,
        })
    }
}
