pub use super::branch::Entity as Branch;
pub use super::company::Entity as Company;
pub use super::ingredient::Entity as Ingredient;
pub use super::menu_item::Entity as MenuItem;
pub use super::order::Entity as Order;
pub use super::order_cancellation::Entity as OrderCancellation;
pub use super::order_feedback::Entity as OrderFeedback;
pub use super::order_item::Entity as OrderItem;
pub use super::recipe_item::Entity as RecipeItem;
pub use super::restaurant_table::Entity as RestaurantTable;
pub use super::role::Entity as Role;
pub use super::staff::Entity as Staff;
pub use super::support_ticket::Entity as SupportTicket;
pub use super::table_group::Entity as TableGroup;
pub use super::user::Entity as User;
pub use super::waste_log::Entity as WasteLog;
