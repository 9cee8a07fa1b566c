use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    model::{
        order::{
            CreateOrderParams, ItemStatus, OrderFilter, OrderStatus, OrderWithItems, PaymentStatus,
        },
        tenant::{branch_filter, Scope},
    },
    util::money::round2,
};

/// Repository for orders, their items and cancellation records.
pub struct OrderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    /// Creates a new OrderRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `OrderRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Orders of the scope matching `filter`, newest first, each with its items.
    pub async fn get_filtered(
        &self,
        scope: Scope,
        filter: &OrderFilter,
    ) -> Result<Vec<OrderWithItems>, DbErr> {
        let mut query = entity::prelude::Order::find()
            .filter(entity::order::Column::CompanyId.eq(scope.company_id))
            .filter(branch_filter(entity::order::Column::BranchId, scope.branch_id));

        if let Some(status) = filter.status {
            query = query.filter(entity::order::Column::OrderStatus.eq(status.as_str()));
        }
        if let Some(table_number) = filter.table_number {
            query = query.filter(entity::order::Column::TableNumber.eq(table_number));
        }
        if let Some(customer_id) = &filter.customer_id {
            query = query.filter(entity::order::Column::CustomerId.eq(customer_id.as_str()));
        }
        if let Some(start) = filter.start {
            query = query.filter(entity::order::Column::CreatedAt.gte(start));
        }
        if let Some(end) = filter.end {
            query = query.filter(entity::order::Column::CreatedAt.lte(end));
        }

        let orders = query
            .order_by_desc(entity::order::Column::CreatedAt)
            .order_by_desc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        let order_ids: Vec<i32> = orders.iter().map(|o| o.id).collect();
        let mut items_by_order: HashMap<i32, Vec<entity::order_item::Model>> = HashMap::new();
        if !order_ids.is_empty() {
            let items = entity::prelude::OrderItem::find()
                .filter(entity::order_item::Column::OrderId.is_in(order_ids))
                .order_by_asc(entity::order_item::Column::Id)
                .all(self.db)
                .await?;
            for item in items {
                items_by_order.entry(item.order_id).or_default().push(item);
            }
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let items = items_by_order.remove(&order.id).unwrap_or_default();
                OrderWithItems { order, items }
            })
            .collect())
    }

    /// Finds an order of the company, or `None` if unknown or foreign.
    pub async fn find(&self, company_id: i32, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id)
            .filter(entity::order::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Finds an order regardless of company, for tenant-less public feedback.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Gets every line of an order, cancelled ones included, in insertion order.
    ///
    /// # Arguments
    /// - `order_id` - Order to load lines for
    ///
    /// # Returns
    /// - `Ok(Vec<order_item::Model>)` - Lines of the order
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_items(&self, order_id: i32) -> Result<Vec<entity::order_item::Model>, DbErr> {
        entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_item::Column::Id)
            .all(self.db)
            .await
    }

    /// Inserts the order and its lines. Run inside a transaction.
    ///
    /// Totals are the per-currency sums of price times quantity, rounded to two decimals.
    pub async fn create(
        &self,
        scope: Scope,
        table: &entity::restaurant_table::Model,
        params: CreateOrderParams,
    ) -> Result<OrderWithItems, DbErr> {
        let total_inr: f64 = params
            .lines
            .iter()
            .map(|l| l.price_inr * l.quantity as f64)
            .sum();
        let total_usd: f64 = params
            .lines
            .iter()
            .map(|l| l.price_usd * l.quantity as f64)
            .sum();
        let now = Utc::now();

        let order = entity::order::ActiveModel {
            company_id: ActiveValue::Set(Some(scope.company_id)),
            branch_id: ActiveValue::Set(scope.branch_id.or(table.branch_id)),
            table_id: ActiveValue::Set(table.id),
            table_number: ActiveValue::Set(table.table_number),
            customer_id: ActiveValue::Set(params.customer_id),
            staff_id: ActiveValue::Set(None),
            total_amount_inr: ActiveValue::Set(round2(total_inr)),
            total_amount_usd: ActiveValue::Set(round2(total_usd)),
            payment_status: ActiveValue::Set(
                PaymentStatus::for_method(&params.payment_method)
                    .as_str()
                    .to_string(),
            ),
            currency: ActiveValue::Set(params.currency),
            payment_method: ActiveValue::Set(params.payment_method),
            order_status: ActiveValue::Set(OrderStatus::Pending.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(params.lines.len());
        for line in params.lines {
            let item = entity::order_item::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                company_id: ActiveValue::Set(Some(scope.company_id)),
                menu_item_id: ActiveValue::Set(line.menu_item_id),
                item_name: ActiveValue::Set(line.name),
                quantity: ActiveValue::Set(line.quantity),
                price_inr: ActiveValue::Set(line.price_inr),
                price_usd: ActiveValue::Set(line.price_usd),
                item_status: ActiveValue::Set(ItemStatus::Active.as_str().to_string()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok(OrderWithItems { order, items })
    }

    /// Stores a new status. Moving to `paid` also settles the payment.
    pub async fn update_status(
        &self,
        order: entity::order::Model,
        status: OrderStatus,
    ) -> Result<entity::order::Model, DbErr> {
        let mut active: entity::order::ActiveModel = order.into();
        active.order_status = ActiveValue::Set(status.as_str().to_string());
        if status == OrderStatus::Paid {
            active.payment_status = ActiveValue::Set(PaymentStatus::Paid.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Records why an order, or one of its items, was cancelled.
    pub async fn log_cancellation(
        &self,
        order_id: i32,
        item_id: Option<i32>,
        reason: Option<String>,
        cancelled_by: Option<String>,
    ) -> Result<entity::order_cancellation::Model, DbErr> {
        entity::order_cancellation::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            item_id: ActiveValue::Set(item_id),
            reason: ActiveValue::Set(reason),
            cancelled_by: ActiveValue::Set(cancelled_by),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a line of the given order, or `None` if it belongs elsewhere.
    pub async fn find_item(
        &self,
        order_id: i32,
        item_id: i32,
    ) -> Result<Option<entity::order_item::Model>, DbErr> {
        entity::prelude::OrderItem::find_by_id(item_id)
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .one(self.db)
            .await
    }

    /// Marks a single line as cancelled.
    pub async fn cancel_item(
        &self,
        item: entity::order_item::Model,
    ) -> Result<entity::order_item::Model, DbErr> {
        let mut active: entity::order_item::ActiveModel = item.into();
        active.item_status = ActiveValue::Set(ItemStatus::Cancelled.as_str().to_string());

        active.update(self.db).await
    }

    /// Recomputes the order totals over its active items.
    pub async fn recompute_totals(
        &self,
        order: entity::order::Model,
    ) -> Result<entity::order::Model, DbErr> {
        let items = self.get_items(order.id).await?;
        let active = items
            .iter()
            .filter(|i| i.item_status == ItemStatus::Active.as_str());
        let (total_inr, total_usd) = active.fold((0.0, 0.0), |(inr, usd), i| {
            (
                inr + i.price_inr * i.quantity as f64,
                usd + i.price_usd * i.quantity as f64,
            )
        });

        let mut active: entity::order::ActiveModel = order.into();
        active.total_amount_inr = ActiveValue::Set(round2(total_inr));
        active.total_amount_usd = ActiveValue::Set(round2(total_usd));
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }
}
