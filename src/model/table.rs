use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::api::double_option;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TableDto {
    pub id: i32,
    pub company_id: Option<i32>,
    pub branch_id: Option<i32>,
    pub table_number: i32,
    pub table_name: Option<String>,
    pub qr_code_data: String,
    pub group_id: Option<i32>,
    /// Name of the table's group, `Non AC` when ungrouped.
    pub group_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTableDto {
    #[serde(default)]
    pub table_number: Option<i32>,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default)]
    pub group_id: Option<i32>,
}

/// Update payload. Omitting `group_id` keeps the current group; `null` ungroups the table.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTableDto {
    pub table_number: i32,
    #[serde(default)]
    pub table_name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub group_id: Option<Option<i32>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TableGroupDto {
    pub id: i32,
    pub company_id: Option<i32>,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct SaveTableGroupDto {
    #[serde(default)]
    pub name: Option<String>,
}
