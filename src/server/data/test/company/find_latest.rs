use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

/// Tests the fallback company is the most recently created one.
///
/// Expected: Ok(Some(newest company))
#[tokio::test]
async fn returns_most_recently_created_company() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let newer = factory::create_company(db).await?;
    let older = factory::create_company(db).await?;
    let mut backdated: entity::company::ActiveModel = older.into();
    backdated.created_at = ActiveValue::Set(Utc::now() - Duration::days(30));
    backdated.update(db).await?;

    let repo = CompanyRepository::new(db);
    let latest = repo.find_latest().await?;

    assert_eq!(latest.map(|c| c.id), Some(newer.id));

    Ok(())
}

/// Expected: Ok(None) on an empty database
#[tokio::test]
async fn returns_none_without_companies() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CompanyRepository::new(db);
    assert!(repo.find_latest().await?.is_none());

    Ok(())
}
