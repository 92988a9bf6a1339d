//! Role factory for creating configured server roles.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test roles with an optional special limit.
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    role_id: String,
    special_limit: Option<i32>,
    admin_role: bool,
}

impl<'a> RoleFactory<'a> {
    /// Creates a new RoleFactory with default values.
    ///
    /// Defaults:
    /// - role_id: auto-incremented numeric string
    /// - special_limit: `None`
    /// - admin_role: `false`
    pub fn new(db: &'a DatabaseConnection, server_id: impl Into<String>) -> Self {
        Self {
            db,
            server_id: server_id.into(),
            role_id: next_id().to_string(),
            special_limit: None,
            admin_role: false,
        }
    }

    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    pub fn special_limit(mut self, special_limit: i32) -> Self {
        self.special_limit = Some(special_limit);
        self
    }

    pub fn admin_role(mut self, admin_role: bool) -> Self {
        self.admin_role = admin_role;
        self
    }

    pub async fn build(self) -> Result<entity::server_role::Model, DbErr> {
        entity::server_role::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            role_id: ActiveValue::Set(self.role_id),
            special_limit: ActiveValue::Set(self.special_limit),
            admin_role: ActiveValue::Set(self.admin_role),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with default values in the given server.
pub async fn create_role(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::server_role::Model, DbErr> {
    RoleFactory::new(db, server_id).build().await
}
