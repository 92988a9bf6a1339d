//! Role configuration: quota overrides and admin access.

use sea_orm::DatabaseConnection;

use crate::{
    data::role::RoleRepository,
    error::AppError,
    model::role::{CreateRoleParam, Role, UpdateRoleParam},
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Configures a role for the server.
    ///
    /// # Returns
    /// - `Ok(Role)` - The configured role
    /// - `Err(AppError::Conflict)` - The role is already configured
    pub async fn create(&self, server_id: u64, param: CreateRoleParam) -> Result<Role, AppError> {
        let repo = RoleRepository::new(self.db);

        if repo.find(server_id, param.role_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Role <@&{}> is already configured.",
                param.role_id
            )));
        }

        repo.create(server_id, param).await
    }

    /// Edits a configured role, overwriting only the provided fields.
    ///
    /// # Returns
    /// - `Ok(Role)` - The updated role
    /// - `Err(AppError::NotFound)` - The role isn't configured
    pub async fn edit(
        &self,
        server_id: u64,
        role_id: u64,
        param: UpdateRoleParam,
    ) -> Result<Role, AppError> {
        RoleRepository::new(self.db)
            .update(server_id, role_id, param)
            .await?
            .ok_or_else(|| role_not_found(role_id))
    }

    /// Removes a role's configuration.
    pub async fn remove(&self, server_id: u64, role_id: u64) -> Result<(), AppError> {
        if !RoleRepository::new(self.db).delete(server_id, role_id).await? {
            return Err(role_not_found(role_id));
        }

        Ok(())
    }

    pub async fn list(&self, server_id: u64) -> Result<Vec<Role>, AppError> {
        RoleRepository::new(self.db).get_by_server(server_id).await
    }

    /// Gets the roles that grant access to admin commands.
    pub async fn admin_role_ids(&self, server_id: u64) -> Result<Vec<u64>, AppError> {
        RoleRepository::new(self.db)
            .get_admin_role_ids(server_id)
            .await
    }
}

fn role_not_found(role_id: u64) -> AppError {
    AppError::NotFound(format!("Role <@&{}> is not configured.", role_id))
}
