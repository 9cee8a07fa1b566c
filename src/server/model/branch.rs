use crate::{
    model::branch::{BranchDto, SaveBranchDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct BranchParams {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub manager_name: Option<String>,
    pub is_active: bool,
}

impl BranchParams {
    pub fn from_dto(dto: SaveBranchDto) -> Result<Self, AppError> {
        let name = dto
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("Branch name is required".to_string()))?;

        Ok(Self {
            name,
            address: dto.address,
            phone: dto.phone,
            manager_name: dto.manager_name,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

impl From<entity::branch::Model> for BranchDto {
    fn from(branch: entity::branch::Model) -> Self {
        Self {
            id: branch.id,
            company_id: branch.company_id,
            name: branch.name,
            address: branch.address,
            phone: branch.phone,
            manager_name: branch.manager_name,
            is_active: branch.is_active,
            created_at: branch.created_at,
            updated_at: branch.updated_at,
        }
    }
}
