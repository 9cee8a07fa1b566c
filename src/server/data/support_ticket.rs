use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::support::{CreateTicketParams, TicketStatus, UpdateTicketParams};

pub struct SupportTicketRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SupportTicketRepository<'a, C> {
    /// Creates a new SupportTicketRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `SupportTicketRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Tickets of the company, newest first, optionally filtered by status.
    pub async fn get_all(
        &self,
        company_id: i32,
        status: Option<TicketStatus>,
    ) -> Result<Vec<entity::support_ticket::Model>, DbErr> {
        let mut query = entity::prelude::SupportTicket::find()
            .filter(entity::support_ticket::Column::CompanyId.eq(company_id));
        if let Some(status) = status {
            query = query.filter(entity::support_ticket::Column::Status.eq(status.as_str()));
        }

        query
            .order_by_desc(entity::support_ticket::Column::CreatedAt)
            .order_by_desc(entity::support_ticket::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a ticket of the company.
    pub async fn find(
        &self,
        company_id: i32,
        id: i32,
    ) -> Result<Option<entity::support_ticket::Model>, DbErr> {
        entity::prelude::SupportTicket::find_by_id(id)
            .filter(entity::support_ticket::Column::CompanyId.eq(company_id))
            .one(self.db)
            .await
    }

    /// Opens a ticket with status `open`.
    ///
    /// # Arguments
    /// - `company_id` - Company raising the ticket
    /// - `created_by` - User who raised it
    /// - `params` - Subject, description and priority
    ///
    /// # Returns
    /// - `Ok(support_ticket::Model)` - The inserted row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        company_id: i32,
        created_by: i32,
        params: CreateTicketParams,
    ) -> Result<entity::support_ticket::Model, DbErr> {
        let now = Utc::now();

        entity::support_ticket::ActiveModel {
            company_id: ActiveValue::Set(company_id),
            created_by: ActiveValue::Set(Some(created_by)),
            subject: ActiveValue::Set(params.subject),
            description: ActiveValue::Set(params.description),
            priority: ActiveValue::Set(params.priority.as_str().to_string()),
            status: ActiveValue::Set(TicketStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Applies the fields present in `params` and bumps `updated_at`.
    pub async fn update(
        &self,
        ticket: entity::support_ticket::Model,
        params: UpdateTicketParams,
    ) -> Result<entity::support_ticket::Model, DbErr> {
        let mut active: entity::support_ticket::ActiveModel = ticket.into();
        if let Some(subject) = params.subject {
            active.subject = ActiveValue::Set(subject);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(priority) = params.priority {
            active.priority = ActiveValue::Set(priority.as_str().to_string());
        }
        if let Some(status) = params.status {
            active.status = ActiveValue::Set(status.as_str().to_string());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        active.update(self.db).await
    }

    /// Deletes the ticket. Returns whether a row was removed.
    pub async fn delete(&self, company_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::SupportTicket::delete_many()
            .filter(entity::support_ticket::Column::Id.eq(id))
            .filter(entity::support_ticket::Column::CompanyId.eq(company_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
