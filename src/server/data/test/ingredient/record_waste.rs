use super::*;

/// Tests waste is logged and stock decremented.
///
/// Expected: Ok with stock 10 - 2.5 = 7.5
#[tokio::test]
async fn logs_waste_and_decrements_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let ingredient = factory::create_ingredient(db, company.id).await?;

    let repo = IngredientRepository::new(db);
    let (waste, updated) = repo
        .record_waste(
            ingredient,
            WasteParams {
                quantity: 2.5,
                reason: Some("Spoiled".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.current_stock, 7.5);
    assert_eq!(waste.quantity, 2.5);
    assert_eq!(waste.company_id, Some(company.id));

    Ok(())
}

/// Tests stock never goes negative.
///
/// Expected: Ok with stock clamped to 0
#[tokio::test]
async fn clamps_stock_at_zero() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let ingredient = factory::ingredient::IngredientFactory::new(db, company.id)
        .stock(1.0, 0.0)
        .build()
        .await?;

    let repo = IngredientRepository::new(db);
    let (_, updated) = repo
        .record_waste(
            ingredient,
            WasteParams {
                quantity: 4.0,
                reason: None,
            },
        )
        .await?;

    assert_eq!(updated.current_stock, 0.0);

    Ok(())
}

/// Tests back-to-back waste posts made from the same stale read both count.
///
/// Expected: Ok with stock 10 -> 7 -> 4, then clamped to 0
#[tokio::test]
async fn successive_waste_from_stale_rows_accumulates() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let ingredient = factory::create_ingredient(db, company.id).await?;
    assert_eq!(ingredient.current_stock, 10.0);

    let repo = IngredientRepository::new(db);
    let waste = |quantity: f64| WasteParams {
        quantity,
        reason: None,
    };

    let (_, first) = repo.record_waste(ingredient.clone(), waste(3.0)).await?;
    let (_, second) = repo.record_waste(ingredient.clone(), waste(3.0)).await?;
    assert_eq!(first.current_stock, 7.0);
    assert_eq!(second.current_stock, 4.0);

    let (_, drained) = repo.record_waste(ingredient.clone(), waste(9.0)).await?;
    assert_eq!(drained.current_stock, 0.0);

    let logged = entity::prelude::WasteLog::find().all(db).await?;
    assert_eq!(logged.len(), 3);

    Ok(())
}
