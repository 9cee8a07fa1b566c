use super::*;

/// Tests the maintenance sweep only clears expired tokens.
///
/// Expected: Ok(1) with the live token untouched
#[tokio::test]
async fn clears_only_expired_tokens() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let expired = factory::create_user(db).await?;
    let live = factory::create_user(db).await?;
    let repo = UserRepository::new(db);
    repo.set_reset_token(expired.id, "old".to_string(), Utc::now() - Duration::hours(2))
        .await?;
    repo.set_reset_token(live.id, "new".to_string(), Utc::now() + Duration::hours(1))
        .await?;

    let cleared = repo.clear_expired_reset_tokens(Utc::now()).await?;

    assert_eq!(cleared, 1);
    let expired = repo.find_by_id(expired.id).await?.unwrap();
    let live = repo.find_by_id(live.id).await?.unwrap();
    assert!(expired.reset_token.is_none());
    assert_eq!(live.reset_token.as_deref(), Some("new"));

    Ok(())
}
