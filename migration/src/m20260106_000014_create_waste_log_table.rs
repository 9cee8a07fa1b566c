use sea_orm_migration::{prelude::*, schema::*};

use super::m20260106_000012_create_ingredient_table::Ingredient;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WasteLog::Table)
                    .if_not_exists()
                    .col(pk_auto(WasteLog::Id))
                    .col(integer_null(WasteLog::CompanyId))
                    .col(integer(WasteLog::IngredientId))
                    .col(double(WasteLog::Quantity))
                    .col(text_null(WasteLog::Reason))
                    .col(
                        timestamp_with_time_zone(WasteLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waste_log_ingredient")
                            .from(WasteLog::Table, WasteLog::IngredientId)
                            .to(Ingredient::Table, Ingredient::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WasteLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum WasteLog {
    #[sea_orm(iden = "waste_log")]
    Table,
    Id,
    CompanyId,
    IngredientId,
    Quantity,
    Reason,
    CreatedAt,
}
