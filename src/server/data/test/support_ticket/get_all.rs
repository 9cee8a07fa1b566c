use super::*;
use crate::server::model::support::UpdateTicketParams;

/// Tests tickets are scoped to the company and filterable by status.
///
/// Expected: Ok with both own tickets unfiltered, only the resolved one when filtered
#[tokio::test]
async fn filters_company_tickets_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (company, admin) = factory::helpers::create_company_with_admin(db).await?;
    let other = factory::create_company(db).await?;
    factory::create_ticket(db, company.id, Some(admin.id)).await?;
    let resolved = factory::create_ticket(db, company.id, Some(admin.id)).await?;
    factory::create_ticket(db, other.id, None).await?;

    let repo = SupportTicketRepository::new(db);
    repo.update(
        resolved.clone(),
        UpdateTicketParams {
            status: Some(TicketStatus::Resolved),
            ..Default::default()
        },
    )
    .await?;

    let all = repo.get_all(company.id, None).await?;
    let only_resolved = repo
        .get_all(company.id, Some(TicketStatus::Resolved))
        .await?;

    assert_eq!(all.len(), 2);
    assert_eq!(only_resolved.len(), 1);
    assert_eq!(only_resolved[0].id, resolved.id);

    Ok(())
}
