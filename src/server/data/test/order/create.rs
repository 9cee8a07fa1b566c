use super::*;

fn line(menu_item_id: i32, quantity: i32, price_inr: f64, price_usd: f64) -> OrderLine {
    OrderLine {
        menu_item_id,
        name: format!("Dish {}", menu_item_id),
        quantity,
        price_inr,
        price_usd,
    }
}

/// Tests totals are summed per currency and rounded to two decimals.
///
/// Expected: Ok with INR 2 * 120.50 + 1 * 80.25 = 321.25 and USD 3.62
#[tokio::test]
async fn computes_rounded_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(
            Scope::company(company.id),
            &table,
            CreateOrderParams {
                table_number: table.table_number,
                lines: vec![line(item.id, 2, 120.5, 1.445), line(item.id, 1, 80.25, 0.73)],
                currency: "INR".to_string(),
                payment_method: "cash".to_string(),
                customer_id: Some("cust-1".to_string()),
            },
        )
        .await?;

    assert_eq!(order.order.total_amount_inr, 321.25);
    assert_eq!(order.order.total_amount_usd, 3.62);
    assert_eq!(order.order.order_status, "pending");
    assert_eq!(order.order.payment_status, "pending");
    assert_eq!(order.items.len(), 2);
    assert!(order.items.iter().all(|i| i.item_status == "active"));

    Ok(())
}

/// Tests non-cash orders are recorded as paid.
///
/// Expected: Ok with payment_status "paid"
#[tokio::test]
async fn marks_non_cash_orders_paid() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(
            Scope::company(company.id),
            &table,
            CreateOrderParams {
                table_number: table.table_number,
                lines: vec![line(item.id, 1, 100.0, 1.2)],
                currency: "INR".to_string(),
                payment_method: "upi".to_string(),
                customer_id: None,
            },
        )
        .await?;

    assert_eq!(order.order.payment_status, "paid");

    Ok(())
}
