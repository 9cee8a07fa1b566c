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
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(integer_null(OrderItem::CompanyId))
                    .col(integer(OrderItem::MenuItemId))
                    .col(string(OrderItem::ItemName))
                    .col(integer(OrderItem::Quantity))
                    .col(double(OrderItem::PriceInr))
                    .col(double(OrderItem::PriceUsd))
                    .col(string(OrderItem::ItemStatus).default("active"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order")
                            .from(OrderItem::Table, OrderItem::OrderId)
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
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    #[sea_orm(iden = "order_items")]
    Table,
    Id,
    OrderId,
    CompanyId,
    MenuItemId,
    ItemName,
    Quantity,
    PriceInr,
    PriceUsd,
    ItemStatus,
}
