//! Roles and the resources they grant.

use std::str::FromStr;

use crate::{
    model::role::{RoleDto, SaveRoleDto},
    server::error::{internal::InternalError, AppError},
};

/// Areas of the admin panel a custom role can be allowed to manage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Menu,
    Tables,
    Orders,
    Inventory,
    Staff,
    Branches,
    Support,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Tables => "tables",
            Self::Orders => "orders",
            Self::Inventory => "inventory",
            Self::Staff => "staff",
            Self::Branches => "branches",
            Self::Support => "support",
        }
    }
}

impl FromStr for Resource {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "menu" => Ok(Self::Menu),
            "tables" => Ok(Self::Tables),
            "orders" => Ok(Self::Orders),
            "inventory" => Ok(Self::Inventory),
            "staff" => Ok(Self::Staff),
            "branches" => Ok(Self::Branches),
            "support" => Ok(Self::Support),
            _ => Err(AppError::BadRequest(format!("Unknown permission: {}", value))),
        }
    }
}

/// Legacy role strings with full access to their company.
pub fn is_admin_role(role: &str) -> bool {
    matches!(role, "admin" | "owner")
}

/// Role string given to self-registered diners.
pub const CUSTOMER_ROLE: &str = "customer";

/// Everyone except customers works for the restaurant.
pub fn is_staff_role(role: &str) -> bool {
    role != CUSTOMER_ROLE
}

/// Decodes the JSON array stored in `roles.permissions`.
pub fn parse_permissions(role: &entity::role::Model) -> Result<Vec<String>, InternalError> {
    serde_json::from_str::<Vec<String>>(&role.permissions).map_err(|source| {
        InternalError::MalformedPermissions {
            role_id: role.id,
            source,
        }
    })
}

/// Validated role fields with a normalized, de-duplicated permission list.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleParams {
    pub name: String,
    pub permissions: Vec<Resource>,
}

impl RoleParams {
    pub fn from_dto(dto: SaveRoleDto) -> Result<Self, AppError> {
        let name = dto
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::BadRequest("Role name is required".to_string()))?;

        let mut permissions = Vec::new();
        for raw in &dto.permissions {
            let resource = raw.parse::<Resource>()?;
            if !permissions.contains(&resource) {
                permissions.push(resource);
            }
        }

        Ok(Self { name, permissions })
    }

    /// JSON array stored in `roles.permissions`.
    pub fn permissions_json(&self) -> String {
        let names: Vec<&str> = self.permissions.iter().map(Resource::as_str).collect();
        serde_json::Value::from(names).to_string()
    }
}

/// Converts a role row into its DTO, decoding the permission list.
pub fn role_into_dto(role: entity::role::Model) -> Result<RoleDto, InternalError> {
    let permissions = parse_permissions(&role)?;

    Ok(RoleDto {
        id: role.id,
        company_id: role.company_id,
        name: role.name,
        permissions,
        created_at: role.created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_permission_list() {
        let params = RoleParams::from_dto(SaveRoleDto {
            name: Some(" Cashier ".to_string()),
            permissions: vec!["Orders".into(), "menu".into(), "orders".into()],
        })
        .unwrap();

        assert_eq!(params.name, "Cashier");
        assert_eq!(params.permissions, vec![Resource::Orders, Resource::Menu]);
        assert_eq!(params.permissions_json(), r#"["orders","menu"]"#);
    }

    /// Expected: Err(BadRequest) for a resource outside the known set
    #[test]
    fn rejects_unknown_resource() {
        let result = RoleParams::from_dto(SaveRoleDto {
            name: Some("Chef".to_string()),
            permissions: vec!["kitchen".into()],
        });

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn owner_counts_as_admin() {
        assert!(is_admin_role("owner"));
        assert!(is_admin_role("admin"));
        assert!(!is_admin_role("staff"));
    }
}
