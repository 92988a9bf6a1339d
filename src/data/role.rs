//! Role repository for quota overrides and admin roles.

use std::collections::HashMap;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    error::AppError,
    model::role::{CreateRoleParam, Role, UpdateRoleParam},
    util::parse::count_to_db,
};

/// Repository providing database operations for configured roles.
pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    /// Creates a new RoleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a role configuration.
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate role
    pub async fn create(&self, server_id: u64, param: CreateRoleParam) -> Result<Role, AppError> {
        let entity = entity::server_role::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            role_id: ActiveValue::Set(param.role_id.to_string()),
            special_limit: ActiveValue::Set(param.special_limit.map(count_to_db)),
            admin_role: ActiveValue::Set(param.admin_role),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Role::from_entity(entity)
    }

    pub async fn find(&self, server_id: u64, role_id: u64) -> Result<Option<Role>, AppError> {
        let entity = self.find_entity(server_id, role_id).await?;
        entity.map(Role::from_entity).transpose()
    }

    /// Updates the provided fields of a role, keeping the rest.
    ///
    /// # Returns
    /// - `Ok(Some(Role))` - The updated role
    /// - `Ok(None)` - No such role is configured
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(
        &self,
        server_id: u64,
        role_id: u64,
        param: UpdateRoleParam,
    ) -> Result<Option<Role>, AppError> {
        let Some(entity) = self.find_entity(server_id, role_id).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        if let Some(special_limit) = param.special_limit {
            active.special_limit = ActiveValue::Set(Some(count_to_db(special_limit)));
        }
        if let Some(admin_role) = param.admin_role {
            active.admin_role = ActiveValue::Set(admin_role);
        }

        let updated = active.update(self.db).await?;
        Role::from_entity(updated).map(Some)
    }

    /// Deletes a role configuration.
    ///
    /// # Returns
    /// - `Ok(true)` - The role was removed
    /// - `Ok(false)` - No such role was configured
    pub async fn delete(&self, server_id: u64, role_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::ServerRole::delete_many()
            .filter(entity::server_role::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::server_role::Column::RoleId.eq(role_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    pub async fn get_by_server(&self, server_id: u64) -> Result<Vec<Role>, AppError> {
        let entities = entity::prelude::ServerRole::find()
            .filter(entity::server_role::Column::ServerId.eq(server_id.to_string()))
            .order_by_asc(entity::server_role::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Role::from_entity).collect()
    }

    /// Gets the special limits of the configured roles among `role_ids`.
    ///
    /// Roles the server has not configured are absent from the map; configured roles
    /// without an override map to `None`.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    /// - `role_ids` - Roles held by the member
    ///
    /// # Returns
    /// - `Ok(HashMap<u64, Option<u32>>)` - role_id -> special limit
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_special_limits(
        &self,
        server_id: u64,
        role_ids: &[u64],
    ) -> Result<HashMap<u64, Option<u32>>, AppError> {
        if role_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let role_id_strings: Vec<String> = role_ids.iter().map(|id| id.to_string()).collect();
        let entities = entity::prelude::ServerRole::find()
            .filter(entity::server_role::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::server_role::Column::RoleId.is_in(role_id_strings))
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| Role::from_entity(entity).map(|role| (role.role_id, role.special_limit)))
            .collect()
    }

    /// Gets the IDs of roles flagged as admin roles in a server.
    pub async fn get_admin_role_ids(&self, server_id: u64) -> Result<Vec<u64>, AppError> {
        let entities = entity::prelude::ServerRole::find()
            .filter(entity::server_role::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::server_role::Column::AdminRole.eq(true))
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(|entity| Role::from_entity(entity).map(|role| role.role_id))
            .collect()
    }

    async fn find_entity(
        &self,
        server_id: u64,
        role_id: u64,
    ) -> Result<Option<entity::server_role::Model>, AppError> {
        Ok(entity::prelude::ServerRole::find()
            .filter(entity::server_role::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::server_role::Column::RoleId.eq(role_id.to_string()))
            .one(self.db)
            .await?)
    }
}
