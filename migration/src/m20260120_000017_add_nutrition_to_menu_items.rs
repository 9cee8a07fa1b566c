use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000007_create_menu_item_table::MenuItem;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if !manager.has_column("menu_items", "nutritional_info").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(MenuItem::Table)
                        .add_column(text_null(MenuItem::NutritionalInfo))
                        .to_owned(),
                )
                .await?;
        }

        if !manager.has_column("menu_items", "vitamins").await? {
            manager
                .alter_table(
                    Table::alter()
                        .table(MenuItem::Table)
                        .add_column(text_null(MenuItem::Vitamins))
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(MenuItem::Table)
                    .drop_column(MenuItem::NutritionalInfo)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(MenuItem::Table)
                    .drop_column(MenuItem::Vitamins)
                    .to_owned(),
            )
            .await
    }
}
