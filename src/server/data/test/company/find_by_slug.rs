use super::*;

/// Tests slug lookup ignores case and surrounding whitespace.
///
/// Expected: Ok(Some(company))
#[tokio::test]
async fn finds_company_by_slug_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::CompanyFactory::new(db)
        .slug("spiceroute")
        .build()
        .await?;

    let repo = CompanyRepository::new(db);
    let found = repo.find_by_slug(" SpiceRoute ").await?;

    assert_eq!(found.map(|c| c.id), Some(company.id));

    Ok(())
}

/// Tests an unknown slug yields nothing.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_company(db).await?;

    let repo = CompanyRepository::new(db);
    assert!(repo.find_by_slug("nobody").await?.is_none());

    Ok(())
}
