use super::*;

/// Tests startup cleanup removes placeholder and uncategorized rows only.
///
/// Expected: Ok(4) with the valid item left in place
#[tokio::test]
async fn deletes_placeholder_and_uncategorized_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_menu_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let valid = factory::create_menu_item(db, company.id).await?;
    factory::menu_item::MenuItemFactory::new(db, company.id)
        .name(CATEGORY_PLACEHOLDER)
        .category(Some("Soups"))
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, company.id)
        .category(Some("add-new"))
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, company.id)
        .category(Some(""))
        .build()
        .await?;
    factory::menu_item::MenuItemFactory::new(db, company.id)
        .category(None)
        .build()
        .await?;

    let repo = MenuItemRepository::new(db);
    let removed = repo.delete_invalid().await?;

    assert_eq!(removed, 4);
    let remaining = entity::prelude::MenuItem::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, valid.id);

    Ok(())
}
