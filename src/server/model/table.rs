//! Restaurant table and table group parameter models.

use crate::{
    model::table::{CreateTableDto, SaveTableGroupDto, TableDto, TableGroupDto, UpdateTableDto},
    server::error::AppError,
};

/// Group name reported for tables without a group.
pub const DEFAULT_GROUP_NAME: &str = "Non AC";

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTableParams {
    pub table_number: i32,
    pub table_name: String,
    pub group_id: Option<i32>,
}

impl CreateTableParams {
    pub fn from_dto(dto: CreateTableDto) -> Result<Self, AppError> {
        let Some(table_number) = dto.table_number else {
            return Err(AppError::BadRequest("Table number is required.".to_string()));
        };

        Ok(Self {
            table_number,
            table_name: dto
                .table_name
                .filter(|n| !n.trim().is_empty())
                .unwrap_or_else(|| format!("Table {}", table_number)),
            group_id: dto.group_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTableParams {
    pub table_number: i32,
    pub table_name: Option<String>,
    /// `None` keeps the group, `Some(None)` ungroups the table.
    pub group_id: Option<Option<i32>>,
}

impl UpdateTableParams {
    pub fn from_dto(dto: UpdateTableDto) -> Self {
        Self {
            table_number: dto.table_number,
            table_name: dto.table_name,
            group_id: dto.group_id,
        }
    }
}

/// QR payload printed on a table, decoded by the customer app.
pub fn qr_code_data(table_number: i32) -> String {
    format!("table-{}", table_number)
}

/// Table row joined with its group.
#[derive(Debug, Clone)]
pub struct TableWithGroup {
    pub table: entity::restaurant_table::Model,
    pub group: Option<entity::table_group::Model>,
}

impl TableWithGroup {
    pub fn into_dto(self) -> TableDto {
        let table = self.table;

        TableDto {
            id: table.id,
            company_id: table.company_id,
            branch_id: table.branch_id,
            table_number: table.table_number,
            table_name: table.table_name,
            qr_code_data: table.qr_code_data,
            group_id: table.group_id,
            group_name: self
                .group
                .map(|g| g.name)
                .unwrap_or_else(|| DEFAULT_GROUP_NAME.to_string()),
            is_active: table.is_active,
            created_at: table.created_at,
        }
    }
}

/// Trims a group name and rejects empty names.
pub fn validate_group_name(dto: SaveTableGroupDto) -> Result<String, AppError> {
    dto.name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::BadRequest("Group name is required".to_string()))
}

impl From<entity::table_group::Model> for TableGroupDto {
    fn from(group: entity::table_group::Model) -> Self {
        Self {
            id: group.id,
            company_id: group.company_id,
            name: group.name,
            created_at: group.created_at,
        }
    }
}
