use super::*;

/// Tests deleting an ingredient removes its recipe lines and waste entries first.
///
/// Expected: Ok(true) with no dependent rows left
#[tokio::test]
async fn removes_recipe_lines_and_waste_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let item = factory::create_menu_item(db, company.id).await?;
    let ingredient = factory::create_ingredient(db, company.id).await?;
    MenuItemRepository::new(db)
        .replace_recipe(&item, &[(ingredient.id, 0.3)])
        .await?;

    let repo = IngredientRepository::new(db);
    repo.record_waste(
        ingredient.clone(),
        WasteParams {
            quantity: 1.0,
            reason: None,
        },
    )
    .await?;

    let deleted = repo.delete_cascade(company.id, ingredient.id).await?;

    assert!(deleted);
    assert!(entity::prelude::RecipeItem::find().all(db).await?.is_empty());
    assert!(entity::prelude::WasteLog::find().all(db).await?.is_empty());
    assert!(entity::prelude::Ingredient::find_by_id(ingredient.id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests another company cannot delete the ingredient.
///
/// Expected: Ok(false) and the ingredient still present
#[tokio::test]
async fn ignores_foreign_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_company(db).await?;
    let intruder = factory::create_company(db).await?;
    let ingredient = factory::create_ingredient(db, owner.id).await?;

    let repo = IngredientRepository::new(db);
    let deleted = repo.delete_cascade(intruder.id, ingredient.id).await?;

    assert!(!deleted);
    assert!(repo.find(owner.id, ingredient.id).await?.is_some());

    Ok(())
}
