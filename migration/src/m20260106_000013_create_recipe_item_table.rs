use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000007_create_menu_item_table::MenuItem,
    m20260106_000012_create_ingredient_table::Ingredient,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RecipeItem::Table)
                    .if_not_exists()
                    .col(pk_auto(RecipeItem::Id))
                    .col(integer_null(RecipeItem::CompanyId))
                    .col(integer(RecipeItem::MenuItemId))
                    .col(integer(RecipeItem::IngredientId))
                    .col(double(RecipeItem::Quantity))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_items_menu_item")
                            .from(RecipeItem::Table, RecipeItem::MenuItemId)
                            .to(MenuItem::Table, MenuItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_recipe_items_ingredient")
                            .from(RecipeItem::Table, RecipeItem::IngredientId)
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
            .drop_table(Table::drop().table(RecipeItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RecipeItem {
    #[sea_orm(iden = "recipe_items")]
    Table,
    Id,
    CompanyId,
    MenuItemId,
    IngredientId,
    Quantity,
}
