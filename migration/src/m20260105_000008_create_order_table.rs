use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(integer_null(Order::CompanyId))
                    .col(integer_null(Order::BranchId))
                    .col(integer(Order::TableId))
                    .col(integer(Order::TableNumber))
                    .col(string_null(Order::CustomerId))
                    .col(integer_null(Order::StaffId))
                    .col(double(Order::TotalAmountInr).default(0.0))
                    .col(double(Order::TotalAmountUsd).default(0.0))
                    .col(string(Order::Currency).default("INR"))
                    .col(string(Order::PaymentMethod))
                    .col(string(Order::OrderStatus).default("pending"))
                    .col(string(Order::PaymentStatus).default("pending"))
                    .col(
                        timestamp_with_time_zone(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Order::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_company_created")
                    .table(Order::Table)
                    .col(Order::CompanyId)
                    .col(Order::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    #[sea_orm(iden = "orders")]
    Table,
    Id,
    CompanyId,
    BranchId,
    TableId,
    TableNumber,
    CustomerId,
    StaffId,
    TotalAmountInr,
    TotalAmountUsd,
    Currency,
    PaymentMethod,
    OrderStatus,
    PaymentStatus,
    CreatedAt,
    UpdatedAt,
}
