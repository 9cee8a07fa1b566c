use super::*;

/// Tests table numbers are unique per company, not globally.
///
/// Expected: true within the company, false for another company or when excluding itself
#[tokio::test]
async fn checks_number_within_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let other = factory::create_company(db).await?;
    let table = factory::table::TableFactory::new(db, company.id)
        .table_number(4)
        .build()
        .await?;

    let repo = TableRepository::new(db);

    assert!(repo.number_exists(company.id, 4, None).await?);
    assert!(!repo.number_exists(other.id, 4, None).await?);
    assert!(!repo.number_exists(company.id, 4, Some(table.id)).await?);

    Ok(())
}
