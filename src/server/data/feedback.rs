use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr};

use crate::model::order::CreateFeedbackDto;

pub struct FeedbackRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FeedbackRepository<'a, C> {
    /// Creates a new FeedbackRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `FeedbackRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores feedback for an order, stamped with the order's company.
    pub async fn create(
        &self,
        company_id: Option<i32>,
        feedback: CreateFeedbackDto,
    ) -> Result<entity::order_feedback::Model, DbErr> {
        entity::order_feedback::ActiveModel {
            order_id: ActiveValue::Set(feedback.order_id),
            company_id: ActiveValue::Set(company_id),
            customer_id: ActiveValue::Set(feedback.customer_id),
            rating: ActiveValue::Set(feedback.rating),
            comments: ActiveValue::Set(feedback.comments),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
