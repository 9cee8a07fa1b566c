use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ingredient::Table)
                    .if_not_exists()
                    .col(pk_auto(Ingredient::Id))
                    .col(integer_null(Ingredient::CompanyId))
                    .col(integer_null(Ingredient::BranchId))
                    .col(string(Ingredient::Name))
                    .col(double(Ingredient::CurrentStock).default(0.0))
                    .col(string(Ingredient::Unit))
                    .col(double(Ingredient::MinStockLevel).default(0.0))
                    .col(double(Ingredient::CostPerUnit).default(0.0))
                    .col(
                        timestamp_with_time_zone(Ingredient::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Ingredient::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ingredient::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ingredient {
    #[sea_orm(iden = "ingredients")]
    Table,
    Id,
    CompanyId,
    BranchId,
    Name,
    CurrentStock,
    Unit,
    MinStockLevel,
    CostPerUnit,
    CreatedAt,
    UpdatedAt,
}
