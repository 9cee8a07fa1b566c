use super::*;

/// Tests a custom role granting the resource passes.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_when_role_has_resource() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let role = factory::role::create_role(db, company.id, &["menu", "orders"]).await?;
    let user = factory::user::UserFactory::new(db)
        .role("staff")
        .company_id(Some(company.id))
        .role_id(Some(role.id))
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims)
        .require(&[Permission::Manage(Resource::Orders)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests a custom role without the resource is denied.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_when_role_lacks_resource() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let role = factory::role::create_role(db, company.id, &["menu"]).await?;
    let user = factory::user::UserFactory::new(db)
        .role("staff")
        .company_id(Some(company.id))
        .role_id(Some(role.id))
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims)
        .require(&[Permission::Manage(Resource::Staff)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests staff without a custom role keep legacy full access.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_user_without_role_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("staff")
        .role_id(None)
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims)
        .require(&[Permission::Manage(Resource::Inventory)])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests customers without a custom role get no management access.
///
/// Expected: Err(AuthError::AccessDenied) for every resource
#[tokio::test]
async fn denies_customer_without_role_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let user = factory::user::UserFactory::new(db)
        .role("customer")
        .company_id(Some(company.id))
        .role_id(None)
        .build()
        .await?;
    let claims = claims_for(&user);

    for resource in [
        Resource::Menu,
        Resource::Tables,
        Resource::Orders,
        Resource::Inventory,
        Resource::Staff,
        Resource::Branches,
        Resource::Support,
    ] {
        let result = AuthGuard::new(db, &claims)
            .require(&[Permission::Manage(resource)])
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    Ok(())
}

/// Tests a custom role does not lift a customer to management access.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_customer_even_with_granting_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let role = factory::role::create_role(db, company.id, &["orders"]).await?;
    let user = factory::user::UserFactory::new(db)
        .role("customer")
        .company_id(Some(company.id))
        .role_id(Some(role.id))
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims)
        .require(&[Permission::Manage(Resource::Orders)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, msg))) => {
            assert_eq!(id, user.id);
            assert!(msg.contains("customer"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests admins bypass role permissions.
///
/// Expected: Ok(User) even with an empty custom role
#[tokio::test]
async fn admin_bypasses_role_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let role = factory::role::create_role(db, company.id, &[]).await?;
    let user = factory::user::UserFactory::new(db)
        .role("admin")
        .company_id(Some(company.id))
        .role_id(Some(role.id))
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims)
        .require(&[
            Permission::Manage(Resource::Branches),
            Permission::Manage(Resource::Support),
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests stored permissions that are not a JSON list.
///
/// Expected: Err(InternalError::MalformedPermissions)
#[tokio::test]
async fn rejects_malformed_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let role = factory::role::create_role(db, company.id, &["menu"]).await?;
    let mut active: entity::role::ActiveModel = role.clone().into();
    active.permissions = sea_orm::ActiveValue::Set("menu,orders".to_string());
    sea_orm::ActiveModelTrait::update(active, db).await?;

    let user = factory::user::UserFactory::new(db)
        .role("staff")
        .company_id(Some(company.id))
        .role_id(Some(role.id))
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims)
        .require(&[Permission::Manage(Resource::Menu)])
        .await;

    match result {
        Err(AppError::InternalErr(InternalError::MalformedPermissions { role_id, .. })) => {
            assert_eq!(role_id, role.id)
        }
        other => panic!("Expected MalformedPermissions, got: {:?}", other),
    }

    Ok(())
}
