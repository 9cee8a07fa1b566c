use super::*;

/// Tests deleting a branch first moves its rows back to company-wide scope.
///
/// Expected: Ok(true) with the menu item, table and user detached
#[tokio::test]
async fn detaches_children_before_delete() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let branch = factory::create_branch(db, company.id).await?;
    let item = factory::menu_item::MenuItemFactory::new(db, company.id)
        .branch_id(Some(branch.id))
        .build()
        .await?;
    let table = factory::table::TableFactory::new(db, company.id)
        .branch_id(Some(branch.id))
        .build()
        .await?;
    let user = factory::user::UserFactory::new(db)
        .company_id(Some(company.id))
        .branch_id(Some(branch.id))
        .build()
        .await?;

    let repo = BranchRepository::new(db);
    repo.detach_children(company.id, branch.id).await?;
    let deleted = repo.delete(company.id, branch.id).await?;

    assert!(deleted);
    let item = entity::prelude::MenuItem::find_by_id(item.id).one(db).await?.unwrap();
    let table = entity::prelude::RestaurantTable::find_by_id(table.id)
        .one(db)
        .await?
        .unwrap();
    let user = entity::prelude::User::find_by_id(user.id).one(db).await?.unwrap();
    assert_eq!(item.branch_id, None);
    assert_eq!(table.branch_id, None);
    assert_eq!(user.branch_id, None);

    Ok(())
}

/// Tests a branch of another company is left alone.
///
/// Expected: Ok(false)
#[tokio::test]
async fn refuses_foreign_branch() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_company(db).await?;
    let intruder = factory::create_company(db).await?;
    let branch = factory::create_branch(db, owner.id).await?;

    let repo = BranchRepository::new(db);

    assert!(!repo.delete(intruder.id, branch.id).await?);
    assert!(repo.find(owner.id, branch.id).await?.is_some());

    Ok(())
}
