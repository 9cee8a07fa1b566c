use crate::{
    model::staff::{SaveStaffDto, StaffDto},
    server::error::AppError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StaffParams {
    pub name: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_active: bool,
}

impl StaffParams {
    pub fn from_dto(dto: SaveStaffDto) -> Result<Self, AppError> {
        let name = dto
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("Name is required".to_string()))?;

        Ok(Self {
            name,
            role: dto.role,
            phone: dto.phone,
            email: dto.email,
            is_active: dto.is_active.unwrap_or(true),
        })
    }
}

impl From<entity::staff::Model> for StaffDto {
    fn from(staff: entity::staff::Model) -> Self {
        Self {
            id: staff.id,
            company_id: staff.company_id,
            branch_id: staff.branch_id,
            name: staff.name,
            role: staff.role,
            phone: staff.phone,
            email: staff.email,
            is_active: staff.is_active,
            created_at: staff.created_at,
        }
    }
}
