use super::*;

/// Tests the token wins over a slug naming another company.
///
/// Expected: Ok(TenantContext) for the token's company
#[tokio::test]
async fn token_wins_over_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::company::CompanyFactory::new(db)
        .slug("elsewhere")
        .build()
        .await?;
    let company = factory::company::create_company(db).await?;
    let token = claims(Some(company.id), None);

    let tenant = TenantResolver::new(db, false)
        .resolve_authenticated(
            &token,
            &TenantSignals {
                slug_header: Some("elsewhere".to_string()),
                claims: Some(token.clone()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(tenant.company_id, company.id);
    assert_eq!(tenant.source, TenantSource::Token);

    Ok(())
}

/// Tests the branch header overrides the token's branch.
///
/// Expected: Ok(TenantContext) with the header's branch
#[tokio::test]
async fn branch_header_overrides_token_branch() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let first = factory::branch::create_branch(db, company.id).await?;
    let second = factory::branch::create_branch(db, company.id).await?;
    let token = claims(Some(company.id), Some(first.id));

    let tenant = TenantResolver::new(db, false)
        .resolve_authenticated(
            &token,
            &TenantSignals {
                branch_header: Some(second.id.to_string()),
                claims: Some(token.clone()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(tenant.branch_id, Some(second.id));

    Ok(())
}

/// Tests a token without a company.
///
/// Expected: Err(TenantError::MissingCompanyContext)
#[tokio::test]
async fn requires_company_in_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let token = claims(None, None);

    let result = TenantResolver::new(db, false)
        .resolve_authenticated(&token, &TenantSignals::default())
        .await;

    assert!(matches!(
        result,
        Err(AppError::TenantErr(TenantError::MissingCompanyContext))
    ));

    Ok(())
}

/// Tests a branch header that is not a number.
///
/// Expected: Err(TenantError::InvalidBranchHeader)
#[tokio::test]
async fn rejects_malformed_branch_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let token = claims(Some(company.id), None);

    let result = TenantResolver::new(db, false)
        .resolve_authenticated(
            &token,
            &TenantSignals {
                branch_header: Some("main".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::TenantErr(TenantError::InvalidBranchHeader(_)))
    ));

    Ok(())
}
