pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_company_table;
mod m20260105_000002_create_branch_table;
mod m20260105_000003_create_role_table;
mod m20260105_000004_create_user_table;
mod m20260105_000005_create_table_group_table;
mod m20260105_000006_create_restaurant_table_table;
mod m20260105_000007_create_menu_item_table;
mod m20260105_000008_create_order_table;
mod m20260105_000009_create_order_item_table;
mod m20260105_000010_create_order_cancellation_table;
mod m20260105_000011_create_order_feedback_table;
mod m20260106_000012_create_ingredient_table;
mod m20260106_000013_create_recipe_item_table;
mod m20260106_000014_create_waste_log_table;
mod m20260106_000015_create_staff_table;
mod m20260112_000016_create_support_ticket_table;
mod m20260120_000017_add_nutrition_to_menu_items;


pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_company_table::Migration),
            Box::new(m20260105_000002_create_branch_table::Migration),
            Box::new(m20260105_000003_create_role_table::Migration),
            Box::new(m20260105_000004_create_user_table::Migration),
            Box::new(m20260105_000005_create_table_group_table::Migration),
            Box::new(m20260105_000006_create_restaurant_table_table::Migration),
            Box::new(m20260105_000007_create_menu_item_table::Migration),
            Box::new(m20260105_000008_create_order_table::Migration),
            Box::new(m20260105_000009_create_order_item_table::Migration),
            Box::new(m20260105_000010_create_order_cancellation_table::Migration),
            Box::new(m20260105_000011_create_order_feedback_table::Migration),
            Box::new(m20260106_000012_create_ingredient_table::Migration),
            Box::new(m20260106_000013_create_recipe_item_table::Migration),
            Box::new(m20260106_000014_create_waste_log_table::Migration),
            Box::new(m20260106_000015_create_staff_table::Migration),
            Box::new(m20260112_000016_create_support_ticket_table::Migration),
            Box::new(m20260120_000017_add_nutrition_to_menu_items::Migration),
        ]
    }
}
