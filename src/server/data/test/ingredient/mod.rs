use crate::server::{
    data::{ingredient::IngredientRepository, menu_item::MenuItemRepository},
    model::{inventory::WasteParams, tenant::Scope},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_cascade;
mod get_low_stock;
mod record_waste;
