use super::*;

/// Tests a created table is stamped with the scope and gets its QR payload.
///
/// Expected: Ok with qr_code_data "table-9" and the scope's branch
#[tokio::test]
async fn stamps_scope_and_qr_payload() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::create_company(db).await?;
    let branch = factory::create_branch(db, company.id).await?;

    let repo = TableRepository::new(db);
    let table = repo
        .create(
            Scope::with_branch(company.id, Some(branch.id)),
            CreateTableParams {
                table_number: 9,
                table_name: "Table 9".to_string(),
                group_id: None,
            },
        )
        .await?;

    assert_eq!(table.qr_code_data, "table-9");
    assert_eq!(table.company_id, Some(company.id));
    assert_eq!(table.branch_id, Some(branch.id));
    assert!(table.is_active);

    Ok(())
}
