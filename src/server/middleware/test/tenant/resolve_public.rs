use super::*;

/// Tests the slug header names the tenant.
///
/// Expected: Ok(Some) with source Header
#[tokio::test]
async fn resolves_from_slug_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::CompanyFactory::new(db)
        .slug("spicehub")
        .build()
        .await?;

    let tenant = TenantResolver::new(db, false)
        .resolve_public(&TenantSignals {
            slug_header: Some("spicehub".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(tenant.company_id, company.id);
    assert_eq!(tenant.branch_id, None);
    assert_eq!(tenant.source, TenantSource::Header);

    Ok(())
}

/// Tests the first host label names the tenant and the port is ignored.
///
/// Expected: Ok(Some) with source Subdomain
#[tokio::test]
async fn resolves_from_host_subdomain() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::CompanyFactory::new(db)
        .slug("tacoloco")
        .build()
        .await?;

    let tenant = TenantResolver::new(db, false)
        .resolve_public(&TenantSignals {
            host: Some("tacoloco.localhost:3000".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(tenant.company_id, company.id);
    assert_eq!(tenant.source, TenantSource::Subdomain);

    Ok(())
}

/// Tests the slug wins over a token naming another company.
///
/// Expected: Ok(Some) for the slug's company
#[tokio::test]
async fn slug_wins_over_token_on_public_routes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let slug_company = factory::company::CompanyFactory::new(db)
        .slug("alpha")
        .build()
        .await?;
    let token_company = factory::company::create_company(db).await?;

    let tenant = TenantResolver::new(db, false)
        .resolve_public(&TenantSignals {
            slug_header: Some("alpha".to_string()),
            claims: Some(claims(Some(token_company.id), None)),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(tenant.company_id, slug_company.id);
    assert_eq!(tenant.source, TenantSource::Header);

    Ok(())
}

/// Tests a slug that matches no company.
///
/// Expected: Err(TenantError::CompanyNotFound)
#[tokio::test]
async fn unknown_slug_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = TenantResolver::new(db, false)
        .resolve_public(&TenantSignals {
            host: Some("ghost.example.com".to_string()),
            ..Default::default()
        })
        .await;

    match result {
        Err(AppError::TenantErr(TenantError::CompanyNotFound(slug))) => assert_eq!(slug, "ghost"),
        other => panic!("Expected CompanyNotFound, got: {:?}", other),
    }

    Ok(())
}

/// Tests the token is used when no slug is present.
///
/// Expected: Ok(Some) with source Token and the token's branch
#[tokio::test]
async fn falls_back_to_token_company() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let branch = factory::branch::create_branch(db, company.id).await?;

    let tenant = TenantResolver::new(db, false)
        .resolve_public(&TenantSignals {
            host: Some("localhost:5000".to_string()),
            claims: Some(claims(Some(company.id), Some(branch.id))),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(tenant.company_id, company.id);
    assert_eq!(tenant.branch_id, Some(branch.id));
    assert_eq!(tenant.source, TenantSource::Token);

    Ok(())
}

/// Tests the latest-company fallback is off unless enabled.
///
/// Expected: None when disabled, the newest company when enabled
#[tokio::test]
async fn latest_company_fallback_is_opt_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::company::create_company(db).await?;
    let newest = factory::company::create_company(db).await?;

    let disabled = TenantResolver::new(db, false)
        .resolve_public(&TenantSignals::default())
        .await?;
    assert!(disabled.is_none());

    let enabled = TenantResolver::new(db, true)
        .resolve_public(&TenantSignals::default())
        .await?
        .unwrap();
    assert_eq!(enabled.company_id, newest.id);
    assert_eq!(enabled.source, TenantSource::Fallback);

    Ok(())
}

/// Tests a branch header naming another company's branch.
///
/// Expected: Err(TenantError::BranchNotFound)
#[tokio::test]
async fn rejects_foreign_branch_header() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::company::CompanyFactory::new(db)
        .slug("home")
        .build()
        .await?;
    let other = factory::company::create_company(db).await?;
    let foreign_branch = factory::branch::create_branch(db, other.id).await?;

    let result = TenantResolver::new(db, false)
        .resolve_public(&TenantSignals {
            slug_header: Some("home".to_string()),
            branch_header: Some(foreign_branch.id.to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::TenantErr(TenantError::BranchNotFound(id, _))) if id == foreign_branch.id
    ));

    Ok(())
}

/// Tests the token's branch is dropped when the slug names another company.
///
/// Expected: Ok(Some) with no branch
#[tokio::test]
async fn ignores_token_branch_of_other_company() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let slug_company = factory::company::CompanyFactory::new(db)
        .slug("bistro")
        .build()
        .await?;
    let token_company = factory::company::create_company(db).await?;
    let token_branch = factory::branch::create_branch(db, token_company.id).await?;

    let tenant = TenantResolver::new(db, false)
        .resolve_public(&TenantSignals {
            slug_header: Some("bistro".to_string()),
            claims: Some(claims(Some(token_company.id), Some(token_branch.id))),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(tenant.company_id, slug_company.id);
    assert_eq!(tenant.branch_id, None);

    Ok(())
}
