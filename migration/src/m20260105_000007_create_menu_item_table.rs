use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer_null(MenuItem::CompanyId))
                    .col(integer_null(MenuItem::BranchId))
                    .col(string(MenuItem::Name))
                    .col(text_null(MenuItem::Description))
                    .col(double(MenuItem::PriceInr).default(0.0))
                    .col(double(MenuItem::PriceUsd).default(0.0))
                    .col(string_null(MenuItem::Category))
                    .col(string_null(MenuItem::ImageUrl))
                    .col(boolean(MenuItem::IsAvailable).default(true))
                    .col(
                        timestamp_with_time_zone(MenuItem::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    #[sea_orm(iden = "menu_items")]
    Table,
    Id,
    CompanyId,
    BranchId,
    Name,
    Description,
    PriceInr,
    PriceUsd,
    Category,
    ImageUrl,
    IsAvailable,
    NutritionalInfo,
    Vitamins,
    CreatedAt,
}
