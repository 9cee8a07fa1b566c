use super::*;

/// Tests category listing drops empty and `add-new` values and de-duplicates.
///
/// Expected: Ok(["Desserts", "Mains"])
#[tokio::test]
async fn lists_distinct_valid_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    for category in ["Mains", "Mains", "Desserts", "add-new", ""] {
        factory::menu_item::MenuItemFactory::new(db, company.id)
            .category(Some(category))
            .build()
            .await?;
    }
    factory::menu_item::MenuItemFactory::new(db, company.id)
        .category(None)
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);
    let categories = repo.get_categories(Scope::company(company.id)).await?;

    assert_eq!(categories, vec!["Desserts".to_string(), "Mains".to_string()]);

    Ok(())
}
