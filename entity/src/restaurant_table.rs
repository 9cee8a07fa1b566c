use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "restaurant_tables")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub table_number: i32,
    pub table_name: Option<String>,
    pub qr_code_data: String,
    pub group_id: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::table_group::Entity",
        from = "Column::GroupId",
        to = "super::table_group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    TableGroup,
}

impl Related<super::table_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TableGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
