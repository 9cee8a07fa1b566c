use super::*;

/// Tests replacing a recipe drops the old lines and stores the new ones.
///
/// Expected: Ok with exactly the new lines persisted
#[tokio::test]
async fn replaces_existing_recipe_lines() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_inventory_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let item = factory::create_menu_item(db, company.id).await?;
    let rice = factory::create_ingredient(db, company.id).await?;
    let dal = factory::create_ingredient(db, company.id).await?;

    let repo = MenuItemRepository::new(db);
    repo.replace_recipe(&item, &[(rice.id, 0.2)]).await?;
    let created = repo
        .replace_recipe(&item, &[(dal.id, 0.1), (rice.id, 0.15)])
        .await?;

    assert_eq!(created.len(), 2);
    let stored = repo.get_recipe(item.id).await?;
    let lines: Vec<(i32, f64)> = stored.iter().map(|l| (l.ingredient_id, l.quantity)).collect();
    assert_eq!(lines, vec![(dal.id, 0.1), (rice.id, 0.15)]);
    assert!(stored.iter().all(|l| l.company_id == Some(company.id)));

    Ok(())
}
