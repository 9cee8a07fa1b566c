use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ingredients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub name: String,
    pub current_stock: f64,
    pub unit: String,
    pub min_stock_level: f64,
    pub cost_per_unit: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::recipe_item::Entity")]
    RecipeItem,
    #[sea_orm(has_many = "super::waste_log::Entity")]
    WasteLog,
}

impl Related<super::recipe_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecipeItem.def()
    }
}

impl Related<super::waste_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WasteLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
