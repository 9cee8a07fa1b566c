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
                    .table(OrderCancellation::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderCancellation::Id))
                    .col(integer(OrderCancellation::OrderId))
                    .col(integer_null(OrderCancellation::ItemId))
                    .col(text_null(OrderCancellation::Reason))
                    .col(string_null(OrderCancellation::CancelledBy))
                    .col(
                        timestamp_with_time_zone(OrderCancellation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_cancellations_order")
                            .from(OrderCancellation::Table, OrderCancellation::OrderId)
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
            .drop_table(Table::drop().table(OrderCancellation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderCancellation {
    #[sea_orm(iden = "order_cancellations")]
    Table,
    Id,
    OrderId,
    ItemId,
    Reason,
    CancelledBy,
    CreatedAt,
}
