use super::*;

/// Tests both admin role strings pass the admin check.
///
/// Expected: Ok(User) for `admin` and `owner`
#[tokio::test]
async fn grants_access_to_admin_and_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for role in ["admin", "owner"] {
        let user = factory::user::UserFactory::new(db).role(role).build().await?;
        let claims = claims_for(&user);

        let result = AuthGuard::new(db, &claims).require(&[Permission::Admin]).await;

        assert!(result.is_ok(), "{} should pass", role);
        assert_eq!(result.unwrap().role, role);
    }

    Ok(())
}

/// Tests a staff user is denied the admin check.
///
/// Expected: Err(AuthError::AccessDenied) mentioning admin
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("staff")
        .build()
        .await?;
    let claims = claims_for(&user);

    let result = AuthGuard::new(db, &claims).require(&[Permission::Admin]).await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, msg))) => {
            assert_eq!(id, user.id);
            assert!(msg.contains("admin"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests the role stored in the database wins over the role in the token.
///
/// Expected: Err(AuthError::AccessDenied) after a demotion
#[tokio::test]
async fn uses_current_role_not_token_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("staff")
        .build()
        .await?;
    let mut claims = claims_for(&user);
    claims.role = "admin".to_string();

    let result = AuthGuard::new(db, &claims).require(&[Permission::Admin]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
