use super::*;

/// Tests the low-stock report includes ingredients at or below their threshold.
///
/// Expected: Ok with the at-threshold and below-threshold ingredients only
#[tokio::test]
async fn reports_ingredients_at_or_below_threshold() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let at = factory::ingredient::IngredientFactory::new(db, company.id)
        .name("Butter")
        .stock(2.0, 2.0)
        .build()
        .await?;
    let below = factory::ingredient::IngredientFactory::new(db, company.id)
        .name("Atta")
        .stock(0.5, 5.0)
        .build()
        .await?;
    factory::ingredient::IngredientFactory::new(db, company.id)
        .name("Salt")
        .stock(10.0, 1.0)
        .build()
        .await?;

    let repo = IngredientRepository::new(db);
    let low = repo.get_low_stock(Scope::company(company.id)).await?;

    let ids: Vec<i32> = low.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![below.id, at.id]);

    Ok(())
}
