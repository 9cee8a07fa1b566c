use sea_orm::DatabaseConnection;

use crate::{
    model::order::CreateFeedbackDto,
    server::{
        data::{feedback::FeedbackRepository, order::OrderRepository},
        error::AppError,
        model::tenant::TenantContext,
    },
};

pub struct FeedbackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a rating for an order.
    ///
    /// With a resolved tenant the order must belong to it; without one any order is
    /// accepted and the feedback inherits the order's company.
    ///
    /// # Returns
    /// - `Ok(order_feedback::Model)` - Stored feedback
    /// - `Err(AppError::BadRequest)` - Rating outside 1 to 5
    /// - `Err(AppError::NotFound)` - Unknown order, or an order of another tenant
    pub async fn create(
        &self,
        tenant: Option<TenantContext>,
        dto: CreateFeedbackDto,
    ) -> Result<entity::order_feedback::Model, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        let order_repo = OrderRepository::new(self.db);
        let order = match tenant {
            Some(tenant) => order_repo.find(tenant.company_id, dto.order_id).await?,
            None => order_repo.find_by_id(dto.order_id).await?,
        };
        let Some(order) = order else {
            return Err(AppError::NotFound("Order not found".to_string()));
        };

        Ok(FeedbackRepository::new(self.db)
            .create(order.company_id, dto)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::model::tenant::TenantSource;

    fn tenant(company_id: i32) -> Option<TenantContext> {
        Some(TenantContext {
            company_id,
            branch_id: None,
            source: TenantSource::Subdomain,
        })
    }

    fn feedback(order_id: i32, rating: i32) -> CreateFeedbackDto {
        CreateFeedbackDto {
            order_id,
            customer_id: Some("guest-7".to_string()),
            rating,
            comments: Some("Lovely".to_string()),
        }
    }

    /// Expected: Err(BadRequest) for 0 and 6, Ok for both ends of the scale
    #[tokio::test]
    async fn rating_must_be_between_one_and_five() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (company, table, _) = factory::helpers::create_ordering_setup(db).await?;
        let order = factory::create_order(db, company.id, &table).await?;
        let service = FeedbackService::new(db);

        for rating in [0, 6, -1] {
            let result = service.create(tenant(company.id), feedback(order.id, rating)).await;
            assert!(matches!(result, Err(AppError::BadRequest(_))));
        }

        let low = service.create(tenant(company.id), feedback(order.id, 1)).await?;
        let high = service.create(tenant(company.id), feedback(order.id, 5)).await?;
        assert_eq!(low.rating, 1);
        assert_eq!(high.rating, 5);
        assert_eq!(high.company_id, Some(company.id));

        Ok(())
    }

    /// Expected: Err(NotFound) under another tenant, Ok without a tenant
    #[tokio::test]
    async fn order_of_another_tenant_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_tenant_tables()
            .with_order_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let (company, table, _) = factory::helpers::create_ordering_setup(db).await?;
        let order = factory::create_order(db, company.id, &table).await?;
        let other = factory::create_company(db).await?;
        let service = FeedbackService::new(db);

        let foreign = service.create(tenant(other.id), feedback(order.id, 4)).await;
        assert!(matches!(foreign, Err(AppError::NotFound(_))));

        let unknown = service.create(None, feedback(order.id + 100, 4)).await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));

        let public = service.create(None, feedback(order.id, 4)).await?;
        assert_eq!(public.company_id, Some(company.id));

        Ok(())
    }
}
