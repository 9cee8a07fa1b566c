use super::*;

/// Tests the menu only lists the requesting company's items.
///
/// Expected: Ok with only company A's items, ordered by category then name
#[tokio::test]
async fn lists_only_own_company_items_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company_a = factory::create_company(db).await?;
    let company_b = factory::create_company(db).await?;
    factory::menu_item::MenuItemFactory::new(db, company_a.id)
        .name("Vada")
        .category(Some("Starters"))
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, company_a.id)
        .name("Biryani")
        .category(Some("Mains"))
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, company_a.id)
        .name("Appam")
        .category(Some("Mains"))
        .build()
        .await?;
    factory::create_menu_item(db, company_b.id).await?;

    let repo = MenuItemRepository::new(db);
    let items = repo.get_all(Scope::company(company_a.id)).await?;

    let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Appam", "Biryani", "Vada"]);

    Ok(())
}

/// Tests a branch sees its own rows plus company-wide rows.
///
/// Expected: Ok with the branch item and the company-wide item, not the other branch's
#[tokio::test]
async fn branch_scope_includes_company_wide_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let downtown = factory::create_branch(db, company.id).await?;
    let airport = factory::create_branch(db, company.id).await?;
    let shared = factory::create_menu_item(db, company.id).await?;
    let local = factory::menu_item::MenuItemFactory::new(db, company.id)
        .branch_id(Some(downtown.id))
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, company.id)
        .branch_id(Some(airport.id))
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);
    let items = repo
        .get_all(Scope::with_branch(company.id, Some(downtown.id)))
        .await?;

    let mut ids: Vec<i32> = items.iter().map(|i| i.id).collect();
    ids.sort();
    assert_eq!(ids, vec![shared.id, local.id]);

    Ok(())
}
