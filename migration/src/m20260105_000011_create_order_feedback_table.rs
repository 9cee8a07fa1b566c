use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000008_create_order_table::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderFeedback::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderFeedback::Id))
                    .col(integer(OrderFeedback::OrderId))
                    .col(integer_null(OrderFeedback::CompanyId))
                    .col(string_null(OrderFeedback::CustomerId))
                    .col(integer(OrderFeedback::Rating))
                    .col(text_null(OrderFeedback::Comments))
                    .col(
                        timestamp_with_time_zone(OrderFeedback::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_feedback_order")
                            .from(OrderFeedback::Table, OrderFeedback::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderFeedback::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderFeedback {
    #[sea_orm(iden = "order_feedback")]
    Table,
    Id,
    OrderId,
    CompanyId,
    CustomerId,
    Rating,
    Comments,
    CreatedAt,
}
