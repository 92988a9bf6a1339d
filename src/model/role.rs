//! Configured role domain model and parameters.

use crate::{
    error::AppError,
    util::parse::{count_from_db, parse_u64_from_string},
};

/// Bot configuration for a Discord role.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub server_id: u64,
    pub role_id: u64,
    /// Overrides the server's default quota for holders of this role when higher.
    pub special_limit: Option<u32>,
    /// Grants access to admin commands.
    pub admin_role: bool,
}

impl Role {
    pub fn from_entity(entity: entity::server_role::Model) -> Result<Self, AppError> {
        Ok(Self {
            server_id: parse_u64_from_string(entity.server_id)?,
            role_id: parse_u64_from_string(entity.role_id)?,
            special_limit: entity.special_limit.map(count_from_db),
            admin_role: entity.admin_role,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoleParam {
    pub role_id: u64,
    pub special_limit: Option<u32>,
    pub admin_role: bool,
}

/// Parameters for editing a role. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateRoleParam {
    pub special_limit: Option<u32>,
    pub admin_role: Option<bool>,
}
