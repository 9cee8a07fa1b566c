//! Order lifecycle.
//!
//! Every mutation that spans several rows runs in one transaction and publishes its
//! result to the company's room only after commit.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::order::CancelDto,
    server::{
        data::{order::OrderRepository, table::TableRepository},
        error::{tenant::TenantError, AppError},
        model::{
            order::{CreateOrderParams, ItemStatus, OrderFilter, OrderStatus, OrderWithItems},
            tenant::{Scope, TenantContext},
        },
        service::notifier::{Notifier, OrderEventKind},
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
    notifier: &'a Notifier,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection, notifier: &'a Notifier) -> Self {
        Self { db, notifier }
    }

    fn publish(&self, company_id: i32, kind: OrderEventKind, order: &OrderWithItems) {
        self.notifier
            .publish_order(company_id, kind, &order.clone().into_dto());
    }

    /// Orders of the scope with their items, newest first.
    ///
    /// # Arguments
    /// - `scope` - Company and optional branch
    /// - `filter` - Optional status, table, customer and date range filters
    ///
    /// # Returns
    /// - `Ok(Vec<OrderWithItems>)` - Matching orders
    pub async fn get_filtered(
        &self,
        scope: Scope,
        filter: &OrderFilter,
    ) -> Result<Vec<OrderWithItems>, AppError> {
        Ok(OrderRepository::new(self.db)
            .get_filtered(scope, filter)
            .await?)
    }

    /// Places an order at a table of the tenant.
    ///
    /// # Returns
    /// - `Ok(OrderWithItems)` - Created order, published as `new-order`
    /// - `Err(TenantError::CompanyRequired)` - No tenant resolved
    /// - `Err(AppError::NotFound)` - Unknown table number
    pub async fn create(
        &self,
        tenant: Option<TenantContext>,
        params: CreateOrderParams,
    ) -> Result<OrderWithItems, AppError> {
        let Some(tenant) = tenant else {
            return Err(TenantError::CompanyRequired("create order".to_string()).into());
        };
        let scope = tenant.scope();

        let txn = self.db.begin().await?;

        let Some(table) = TableRepository::new(&txn)
            .find_by_number(scope.company_id, params.table_number)
            .await?
        else {
            return Err(AppError::NotFound("Table not found".to_string()));
        };

        let order = OrderRepository::new(&txn)
            .create(scope, &table, params)
            .await?;

        txn.commit().await?;

        tracing::info!(
            "Order {} placed at table {} for company {}",
            order.order.id,
            order.order.table_number,
            scope.company_id
        );
        self.publish(scope.company_id, OrderEventKind::NewOrder, &order);

        Ok(order)
    }

    /// Moves an order along its lifecycle.
    ///
    /// # Returns
    /// - `Ok(OrderWithItems)` - Updated order, published as `order-status-updated`
    /// - `Err(AppError::NotFound)` - Unknown or foreign order
    /// - `Err(AppError::Conflict)` - Transition not allowed
    pub async fn update_status(
        &self,
        company_id: i32,
        id: i32,
        next: OrderStatus,
    ) -> Result<OrderWithItems, AppError> {
        let repo = OrderRepository::new(self.db);

        let Some(order) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound("Order not found".to_string()));
        };
        let next = OrderStatus::transition(&order.order_status, next)?;

        let order = repo.update_status(order, next).await?;
        let items = repo.get_items(order.id).await?;
        let order = OrderWithItems { order, items };

        self.publish(company_id, OrderEventKind::OrderStatusUpdated, &order);

        Ok(order)
    }

    /// Cancels a whole order and records why.
    pub async fn cancel(
        &self,
        company_id: i32,
        id: i32,
        cancel: CancelDto,
    ) -> Result<OrderWithItems, AppError> {
        let txn = self.db.begin().await?;
        let repo = OrderRepository::new(&txn);

        let Some(order) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound("Order not found".to_string()));
        };
        let next = OrderStatus::transition(&order.order_status, OrderStatus::Cancelled)?;

        let order = repo.update_status(order, next).await?;
        repo.log_cancellation(order.id, None, cancel.reason, cancel.cancelled_by)
            .await?;
        let items = repo.get_items(order.id).await?;

        txn.commit().await?;

        let order = OrderWithItems { order, items };
        self.publish(company_id, OrderEventKind::OrderCancelled, &order);

        Ok(order)
    }

    /// Cancels one line of an order and recomputes the totals over the active lines.
    ///
    /// # Returns
    /// - `Ok(OrderWithItems)` - Updated order, published as `order-item-cancelled`
    /// - `Err(AppError::NotFound)` - Unknown order or item
    /// - `Err(AppError::Conflict)` - Order is paid or cancelled, or item already cancelled
    pub async fn cancel_item(
        &self,
        company_id: i32,
        order_id: i32,
        item_id: i32,
        cancel: CancelDto,
    ) -> Result<OrderWithItems, AppError> {
        let txn = self.db.begin().await?;
        let repo = OrderRepository::new(&txn);

        let Some(order) = repo.find(company_id, order_id).await? else {
            return Err(AppError::NotFound("Order not found".to_string()));
        };
        let status = order
            .order_status
            .parse::<OrderStatus>()
            .map_err(|_| AppError::Conflict(format!("Order has unknown status {}", order.order_status)))?;
        if status.is_terminal() {
            return Err(AppError::Conflict(format!(
                "Cannot cancel items of a {} order",
                status
            )));
        }

        let Some(item) = repo.find_item(order.id, item_id).await? else {
            return Err(AppError::NotFound("Order item not found".to_string()));
        };
        if item.item_status == ItemStatus::Cancelled.as_str() {
            return Err(AppError::Conflict("Order item already cancelled".to_string()));
        }

        repo.cancel_item(item).await?;
        repo.log_cancellation(order.id, Some(item_id), cancel.reason, cancel.cancelled_by)
            .await?;
        let order = repo.recompute_totals(order).await?;
        let items = repo.get_items(order.id).await?;

        txn.commit().await?;

        let order = OrderWithItems { order, items };
        self.publish(company_id, OrderEventKind::OrderItemCancelled, &order);

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::model::{order::OrderLine, tenant::TenantSource};

    fn tenant(company_id: i32) -> Option<TenantContext> {
        Some(TenantContext {
            company_id,
            branch_id: None,
            source: TenantSource::Header,
        })
    }

    fn params(table_number: i32, menu_item_id: i32) -> CreateOrderParams {
        CreateOrderParams {
            table_number,
            lines: vec![
                OrderLine {
                    menu_item_id,
                    name: "Paneer Tikka".to_string(),
                    quantity: 2,
                    price_inr: 150.0,
                    price_usd: 1.8,
                },
                OrderLine {
                    menu_item_id,
                    name: "Lassi".to_string(),
                    quantity: 1,
                    price_inr: 60.5,
                    price_usd: 0.75,
                },
            ],
            currency: "INR".to_string(),
            payment_method: "cash".to_string(),
            customer_id: None,
        }
    }

    fn cancel() -> CancelDto {
        CancelDto {
            reason: Some("Out of stock".to_string()),
            cancelled_by: Some("kitchen".to_string()),
        }
    }

    /// Expected: Err(CompanyRequired) and nothing published
    #[tokio::test]
    async fn create_requires_tenant() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let notifier = Notifier::default();

        let result = OrderService::new(db, &notifier)
            .create(None, params(1, 1))
            .await;

        assert!(matches!(
            result,
            Err(AppError::TenantErr(TenantError::CompanyRequired(_)))
        ));

        Ok(())
    }

    /// Expected: Ok with a `new-order` event in the company's room only
    #[tokio::test]
    async fn create_publishes_to_company_room() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;
        let notifier = Notifier::default();
        let mut room = notifier.subscribe(company.id);

        let order = OrderService::new(db, &notifier)
            .create(tenant(company.id), params(table.table_number, item.id))
            .await?;

        assert_eq!(order.order.total_amount_inr, 360.5);
        let event = room.next().await.unwrap();
        assert_eq!(event.kind, OrderEventKind::NewOrder);
        assert_eq!(event.company_id, company.id);

        Ok(())
    }

    /// Expected: Err(NotFound) for a table number the company does not have
    #[tokio::test]
    async fn create_rejects_unknown_table() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;
        let notifier = Notifier::default();

        let result = OrderService::new(db, &notifier)
            .create(tenant(company.id), params(table.table_number + 100, item.id))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Expected: Err(Conflict) when skipping from pending straight to ready
    #[tokio::test]
    async fn update_status_rejects_illegal_transition() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;
        let notifier = Notifier::default();
        let service = OrderService::new(db, &notifier);
        let order = service
            .create(tenant(company.id), params(table.table_number, item.id))
            .await?;

        let result = service
            .update_status(company.id, order.order.id, OrderStatus::Ready)
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));

        let order = service
            .update_status(company.id, order.order.id, OrderStatus::Preparing)
            .await?;
        assert_eq!(order.order.order_status, "preparing");

        Ok(())
    }

    /// Expected: totals drop to the remaining line; a second cancel is a conflict
    #[tokio::test]
    async fn cancel_item_recomputes_totals() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;
        let notifier = Notifier::default();
        let service = OrderService::new(db, &notifier);
        let order = service
            .create(tenant(company.id), params(table.table_number, item.id))
            .await?;
        let lassi = order
            .items
            .iter()
            .find(|i| i.item_name == "Lassi")
            .map(|i| i.id)
            .unwrap();

        let updated = service
            .cancel_item(company.id, order.order.id, lassi, cancel())
            .await?;

        assert_eq!(updated.order.total_amount_inr, 300.0);
        assert_eq!(updated.order.total_amount_usd, 3.6);

        let again = service
            .cancel_item(company.id, order.order.id, lassi, cancel())
            .await;
        assert!(matches!(again, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Expected: Err(NotFound) when another company cancels the order
    #[tokio::test]
    async fn cancel_is_tenant_scoped() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;
        let other = factory::create_company(db).await?;
        let notifier = Notifier::default();
        let service = OrderService::new(db, &notifier);
        let order = service
            .create(tenant(company.id), params(table.table_number, item.id))
            .await?;

        let result = service.cancel(other.id, order.order.id, cancel()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        let cancelled = service.cancel(company.id, order.order.id, cancel()).await?;
        assert_eq!(cancelled.order.order_status, "cancelled");

        Ok(())
    }
}
