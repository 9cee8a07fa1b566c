use super::*;

/// Tests active tables are listed by number with their group name.
///
/// Expected: Ok with tables 1 and 2, grouped table named after its group,
/// ungrouped table reported as "Non AC"; inactive table omitted
#[tokio::test]
async fn lists_active_tables_with_group_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let group = factory::create_table_group(db, company.id).await?;
    factory::table::TableFactory::new(db, company.id)
        .table_number(2)
        .build()
        .await?;
    factory::table::TableFactory::new(db, company.id)
        .table_number(1)
        .group_id(Some(group.id))
        .build()
        .await?;
    factory::table::TableFactory::new(db, company.id)
        .table_number(3)
        .is_active(false)
        .build()
        .await?;

    let repo = TableRepository::new(db);
    let tables = repo.get_active(Scope::company(company.id)).await?;

    assert_eq!(tables.len(), 2);
    let dtos: Vec<_> = tables.into_iter().map(|t| t.into_dto()).collect();
    assert_eq!(dtos[0].table_number, 1);
    assert_eq!(dtos[0].group_name, group.name);
    assert_eq!(dtos[1].table_number, 2);
    assert_eq!(dtos[1].group_name, DEFAULT_GROUP_NAME);

    Ok(())
}
