use sea_orm::DatabaseConnection;

use crate::server::{
    data::support_ticket::SupportTicketRepository,
    error::AppError,
    model::support::{CreateTicketParams, TicketStatus, UpdateTicketParams},
};

const TICKET_NOT_FOUND: &str = "Ticket not found";

pub struct SupportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SupportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Tickets of the company, optionally narrowed to one status.
    pub async fn get_all(
        &self,
        company_id: i32,
        status: Option<TicketStatus>,
    ) -> Result<Vec<entity::support_ticket::Model>, AppError> {
        Ok(SupportTicketRepository::new(self.db)
            .get_all(company_id, status)
            .await?)
    }

    pub async fn get_by_id(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<entity::support_ticket::Model, AppError> {
        SupportTicketRepository::new(self.db)
            .find(company_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound(TICKET_NOT_FOUND.to_string()))
    }

    pub async fn create(
        &self,
        company_id: i32,
        created_by: i32,
        params: CreateTicketParams,
    ) -> Result<entity::support_ticket::Model, AppError> {
        Ok(SupportTicketRepository::new(self.db)
            .create(company_id, created_by, params)
            .await?)
    }

    /// Applies a partial update. A closed ticket stays closed.
    ///
    /// # Returns
    /// - `Ok(support_ticket::Model)` - Updated ticket
    /// - `Err(AppError::NotFound)` - Unknown ticket
    /// - `Err(AppError::Conflict)` - Attempt to move a closed ticket to another status
    pub async fn update(
        &self,
        company_id: i32,
        id: i32,
        params: UpdateTicketParams,
    ) -> Result<entity::support_ticket::Model, AppError> {
        let repo = SupportTicketRepository::new(self.db);

        let Some(ticket) = repo.find(company_id, id).await? else {
            return Err(AppError::NotFound(TICKET_NOT_FOUND.to_string()));
        };

        let is_closed = ticket.status == TicketStatus::Closed.as_str();
        if is_closed && params.status.is_some_and(|s| s != TicketStatus::Closed) {
            return Err(AppError::Conflict(
                "Closed tickets cannot be reopened".to_string(),
            ));
        }

        Ok(repo.update(ticket, params).await?)
    }

    pub async fn delete(&self, company_id: i32, id: i32) -> Result<(), AppError> {
        if !SupportTicketRepository::new(self.db)
            .delete(company_id, id)
            .await?
        {
            return Err(AppError::NotFound(TICKET_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Expected: Err(Conflict) when reopening, Ok when only the subject changes
    #[tokio::test]
    async fn closed_ticket_cannot_be_reopened() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let company = factory::create_company(db).await?;
        let ticket = factory::create_ticket(db, company.id, None).await?;
        let service = SupportService::new(db);

        let closed = service
            .update(
                company.id,
                ticket.id,
                UpdateTicketParams {
                    status: Some(TicketStatus::Closed),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(closed.status, "closed");

        let reopen = service
            .update(
                company.id,
                ticket.id,
                UpdateTicketParams {
                    status: Some(TicketStatus::Open),
                    ..Default::default()
                },
            )
            .await;
        assert!(matches!(reopen, Err(AppError::Conflict(_))));

        let renamed = service
            .update(
                company.id,
                ticket.id,
                UpdateTicketParams {
                    subject: Some("Printer still offline".to_string()),
                    ..Default::default()
                },
            )
            .await?;
        assert_eq!(renamed.subject, "Printer still offline");
        assert_eq!(renamed.status, "closed");

        Ok(())
    }

    /// Expected: Err(NotFound) for reads, updates and deletes from another company
    #[tokio::test]
    async fn tickets_are_company_scoped() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::create_company(db).await?;
        let other = factory::create_company(db).await?;
        let ticket = factory::create_ticket(db, owner.id, None).await?;
        let service = SupportService::new(db);

        let read = service.get_by_id(other.id, ticket.id).await;
        let update = service
            .update(other.id, ticket.id, UpdateTicketParams::default())
            .await;
        let delete = service.delete(other.id, ticket.id).await;

        assert!(matches!(read, Err(AppError::NotFound(_))));
        assert!(matches!(update, Err(AppError::NotFound(_))));
        assert!(matches!(delete, Err(AppError::NotFound(_))));
        assert!(service.get_all(other.id, None).await?.is_empty());
        assert_eq!(service.get_all(owner.id, None).await?.len(), 1);

        Ok(())
    }
}
