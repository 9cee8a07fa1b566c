use super::*;

/// Tests cancelling an item removes it from the order totals.
///
/// Expected: Ok with totals covering only the remaining active item
#[tokio::test]
async fn excludes_cancelled_items_from_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;
    let order = factory::order::OrderFactory::new(db, company.id, &table)
        .totals(300.0, 3.6)
        .build()
        .await?;
    let kept = factory::create_order_item(db, &order, &item, 1).await?;
    let dropped = factory::create_order_item(db, &order, &item, 2).await?;

    let repo = OrderRepository::new(db);
    let cancelled = repo.cancel_item(dropped).await?;
    let order = repo.recompute_totals(order).await?;

    assert_eq!(cancelled.item_status, "cancelled");
    assert_eq!(order.total_amount_inr, kept.price_inr);
    assert_eq!(order.total_amount_usd, kept.price_usd);

    Ok(())
}
