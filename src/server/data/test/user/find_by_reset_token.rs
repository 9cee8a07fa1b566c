use super::*;

/// Tests a stored, unexpired reset token finds its user.
///
/// Expected: Ok(Some(user))
#[tokio::test]
async fn finds_user_with_valid_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "abc123".to_string(), Utc::now() + Duration::hours(1))
        .await?;

    let found = repo.find_by_reset_token("abc123", Utc::now()).await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests an expired token is rejected.
///
/// Expected: Ok(None)
#[tokio::test]
async fn rejects_expired_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "abc123".to_string(), Utc::now() - Duration::minutes(1))
        .await?;

    assert!(repo.find_by_reset_token("abc123", Utc::now()).await?.is_none());

    Ok(())
}

/// Tests resetting the password clears the token.
///
/// Expected: Ok with reset_token None and the new hash stored
#[tokio::test]
async fn reset_password_clears_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.set_reset_token(user.id, "abc123".to_string(), Utc::now() + Duration::hours(1))
        .await?;
    let user = repo.find_by_id(user.id).await?.unwrap();

    let updated = repo.reset_password(user, "new-hash".to_string()).await?;

    assert_eq!(updated.password_hash, "new-hash");
    assert!(updated.reset_token.is_none());
    assert!(updated.reset_token_expires.is_none());

    Ok(())
}
