//! Factories for orders and their line items.
//!
//! These insert rows directly and do not recompute totals. Use the order service
//! when a test needs totals that match the line items.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating orders against an existing table.
///
/// # Example
///
/// ```rust,ignore
/// let order = OrderFactory::new(&db, company.id, &table)
///     .status("preparing")
///     .totals(240.0, 2.9)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    company_id: i32,
    table_id: i32,
    table_number: i32,
    customer_id: Option<String>,
    total_amount_inr: f64,
    total_amount_usd: f64,
    order_status: String,
    payment_status: String,
    created_at: chrono::DateTime<Utc>,
}

impl<'a> OrderFactory<'a> {
    /// Defaults to a pending, unpaid cash order with zero totals.
    pub fn new(
        db: &'a DatabaseConnection,
        company_id: i32,
        table: &entity::restaurant_table::Model,
    ) -> Self {
        Self {
            db,
            company_id,
            table_id: table.id,
            table_number: table.table_number,
            customer_id: None,
            total_amount_inr: 0.0,
            total_amount_usd: 0.0,
            order_status: "pending".to_string(),
            payment_status: "pending".to_string(),
            created_at: Utc::now(),
        }
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.order_status = status.into();
        self
    }

    pub fn payment_status(mut self, payment_status: impl Into<String>) -> Self {
        self.payment_status = payment_status.into();
        self
    }

    pub fn customer_id(mut self, customer_id: Option<&str>) -> Self {
        self.customer_id = customer_id.map(str::to_string);
        self
    }

    pub fn totals(mut self, inr: f64, usd: f64) -> Self {
        self.total_amount_inr = inr;
        self.total_amount_usd = usd;
        self
    }

    pub fn created_at(mut self, created_at: chrono::DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            company_id: ActiveValue::Set(Some(self.company_id)),
            branch_id: ActiveValue::Set(None),
            table_id: ActiveValue::Set(self.table_id),
            table_number: ActiveValue::Set(self.table_number),
            customer_id: ActiveValue::Set(self.customer_id),
            staff_id: ActiveValue::Set(None),
            total_amount_inr: ActiveValue::Set(self.total_amount_inr),
            total_amount_usd: ActiveValue::Set(self.total_amount_usd),
            currency: ActiveValue::Set("INR".to_string()),
            payment_method: ActiveValue::Set("cash".to_string()),
            order_status: ActiveValue::Set(self.order_status),
            payment_status: ActiveValue::Set(self.payment_status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending order on the given table.
pub async fn create_order(
    db: &DatabaseConnection,
    company_id: i32,
    table: &entity::restaurant_table::Model,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, company_id, table).build().await
}

/// Adds an active line item for `menu_item` to the order.
///
/// # Arguments
/// - `db` - Database connection
/// - `order` - Order the item belongs to
/// - `menu_item` - Dish being ordered; its name and prices are snapshotted
/// - `quantity` - Number of portions
///
/// # Returns
/// - `Ok(entity::order_item::Model)` - Created line item
/// - `Err(DbErr)` - Database error during insert
pub async fn create_order_item(
    db: &DatabaseConnection,
    order: &entity::order::Model,
    menu_item: &entity::menu_item::Model,
    quantity: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        id: ActiveValue::NotSet,
        order_id: ActiveValue::Set(order.id),
        company_id: ActiveValue::Set(order.company_id),
        menu_item_id: ActiveValue::Set(menu_item.id),
        item_name: ActiveValue::Set(menu_item.name.clone()),
        quantity: ActiveValue::Set(quantity),
        price_inr: ActiveValue::Set(menu_item.price_inr),
        price_usd: ActiveValue::Set(menu_item.price_usd),
        item_status: ActiveValue::Set("active".to_string()),
    }
    .insert(db)
    .await
}
