use super::*;

/// Tests orders come back newest first with their items, scoped to the company.
///
/// Expected: Ok with the two company orders, newest first, foreign order excluded
#[tokio::test]
async fn returns_company_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, table, item) = factory::helpers::create_ordering_setup(db).await?;
    let (other, other_table, _) = factory::helpers::create_ordering_setup(db).await?;

    let older = factory::order::OrderFactory::new(db, company.id, &table)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = factory::create_order(db, company.id, &table).await?;
    factory::create_order_item(db, &newer, &item, 2).await?;
    factory::create_order(db, other.id, &other_table).await?;

    let repo = OrderRepository::new(db);
    let orders = repo
        .get_filtered(Scope::company(company.id), &OrderFilter::default())
        .await?;

    let ids: Vec<i32> = orders.iter().map(|o| o.order.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(orders[0].items.len(), 1);
    assert!(orders[1].items.is_empty());

    Ok(())
}

/// Tests status and date filters narrow the result.
///
/// Expected: Ok with only the preparing order inside the window
#[tokio::test]
async fn filters_by_status_and_date_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, table, _) = factory::helpers::create_ordering_setup(db).await?;
    let recent = factory::order::OrderFactory::new(db, company.id, &table)
        .status("preparing")
        .build()
        .await?;
    factory::order::OrderFactory::new(db, company.id, &table)
        .status("preparing")
        .created_at(Utc::now() - Duration::days(10))
        .build()
        .await?;
    factory::create_order(db, company.id, &table).await?;

    let repo = OrderRepository::new(db);
    let filter = OrderFilter {
        status: Some(OrderStatus::Preparing),
        start: Some(Utc::now() - Duration::days(1)),
        end: Some(Utc::now() + Duration::minutes(1)),
        ..Default::default()
    };
    let orders = repo.get_filtered(Scope::company(company.id), &filter).await?;

    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].order.id, recent.id);

    Ok(())
}
