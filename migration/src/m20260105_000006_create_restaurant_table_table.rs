use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_table_group_table::TableGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RestaurantTable::Table)
                    .if_not_exists()
                    .col(pk_auto(RestaurantTable::Id))
                    .col(integer_null(RestaurantTable::CompanyId))
                    .col(integer_null(RestaurantTable::BranchId))
                    .col(integer(RestaurantTable::TableNumber))
                    .col(string_null(RestaurantTable::TableName))
                    .col(string(RestaurantTable::QrCodeData))
                    .col(integer_null(RestaurantTable::GroupId))
                    .col(boolean(RestaurantTable::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(RestaurantTable::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_tables_group")
                            .from(RestaurantTable::Table, RestaurantTable::GroupId)
                            .to(TableGroup::Table, TableGroup::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RestaurantTable {
    #[sea_orm(iden = "restaurant_tables")]
    Table,
    Id,
    CompanyId,
    BranchId,
    TableNumber,
    TableName,
    QrCodeData,
    GroupId,
    IsActive,
    CreatedAt,
}
