use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "menu_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub price_inr: f64,
    pub price_usd: f64,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub nutritional_info: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub vitamins: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe_item::Entity")]
    RecipeItem,
}

impl Related<super::recipe_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
