use crate::server::{
    data::menu_item::MenuItemRepository,
    model::{menu::CATEGORY_PLACEHOLDER, tenant::Scope},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_invalid;
mod get_all;
mod get_categories;
mod replace_recipe;
