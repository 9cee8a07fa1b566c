use super::*;

mod require_admin;
mod require_manage;

/// Tests an empty permission list only checks that the user exists.
///
/// Expected: Ok(User)
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("customer")
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims).require(&[]).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, user.id);

    Ok(())
}

/// Tests a token whose user has been deleted.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn denies_access_when_user_not_in_database() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let mut claims = claims_for(&user);
    claims.id = user.id + 1000;

    let result = AuthGuard::new(db, &claims).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => {
            assert_eq!(id, user.id + 1000)
        }
        other => panic!("Expected UserNotInDatabase, got: {:?}", other),
    }

    Ok(())
}

/// Tests every permission must hold.
///
/// Expected: Err(AuthError::AccessDenied) naming the missing resource
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let company = factory::company::create_company(db).await?;
    let role = factory::role::create_role(db, company.id, &["orders"]).await?;
    let user = factory::user::UserFactory::new(db)
        .role("staff")
        .company_id(Some(company.id))
        .role_id(Some(role.id))
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims)
        .require(&[
            Permission::Manage(Resource::Orders),
            Permission::Manage(Resource::Inventory),
        ])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, msg))) => {
            assert_eq!(id, user.id);
            assert!(msg.contains("inventory"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}
