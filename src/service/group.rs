//! Domain group administration.

use sea_orm::DatabaseConnection;

use crate::{
    data::group::DomainGroupRepository,
    error::AppError,
    model::group::{
        CreateGroupParam, DomainGroup, UpdateGroupParam, MAX_BUTTON_LABEL_LEN,
        MAX_GROUPS_PER_SERVER, MAX_GROUP_ID_LEN,
    },
};

pub struct DomainGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DomainGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new group in a server.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID, which must already exist
    /// - `actor_id` - Discord ID of the admin creating the group
    /// - `param` - Group name, button metadata and optional required role
    ///
    /// # Returns
    /// - `Ok(DomainGroup)` - The created, empty group
    /// - `Err(AppError::BadRequest)` - Blank or overlong name or label, or the server already
    ///   has the maximum number of groups
    /// - `Err(AppError::Conflict)` - A group with this name already exists
    pub async fn create(
        &self,
        server_id: u64,
        actor_id: u64,
        mut param: CreateGroupParam,
    ) -> Result<DomainGroup, AppError> {
        param.group_id = param.group_id.trim().to_string();
        if param.group_id.is_empty() {
            return Err(AppError::BadRequest("No group id".to_string()));
        }
        if param.group_id.chars().count() > MAX_GROUP_ID_LEN {
            return Err(AppError::BadRequest(format!(
                "Group names can be at most {} characters.",
                MAX_GROUP_ID_LEN
            )));
        }
        check_label(&param.button.label)?;

        let repo = DomainGroupRepository::new(self.db);

        if repo.find(server_id, &param.group_id).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "Group `{}` already exists.",
                param.group_id
            )));
        }

        if repo.count_by_server(server_id).await? >= MAX_GROUPS_PER_SERVER {
            return Err(AppError::BadRequest(format!(
                "You can only have {} groups per server.",
                MAX_GROUPS_PER_SERVER
            )));
        }

        let group = repo.create(server_id, actor_id, param).await?;

        tracing::info!(
            "Created group {} in {} by {}",
            group.group_id,
            server_id,
            actor_id
        );

        Ok(group)
    }

    /// Edits a group, overwriting only the provided fields.
    ///
    /// # Returns
    /// - `Ok(DomainGroup)` - The updated group
    /// - `Err(AppError::BadRequest)` - The new label is too long
    /// - `Err(AppError::NotFound)` - The group doesn't exist
    pub async fn edit(
        &self,
        server_id: u64,
        actor_id: u64,
        group_id: &str,
        param: UpdateGroupParam,
    ) -> Result<DomainGroup, AppError> {
        if let Some(label) = &param.button_label {
            check_label(label)?;
        }

        DomainGroupRepository::new(self.db)
            .update(server_id, group_id, actor_id, param)
            .await?
            .ok_or_else(|| group_not_found(group_id))
    }

    /// Deletes a group and every domain in it.
    ///
    /// # Returns
    /// - `Ok(())` - The group was deleted
    /// - `Err(AppError::NotFound)` - The group doesn't exist
    pub async fn delete(&self, server_id: u64, group_id: &str) -> Result<(), AppError> {
        if !DomainGroupRepository::new(self.db)
            .delete(server_id, group_id)
            .await?
        {
            return Err(group_not_found(group_id));
        }

        Ok(())
    }

    /// Gets every group of a server with its domains.
    pub async fn list(&self, server_id: u64) -> Result<Vec<DomainGroup>, AppError> {
        DomainGroupRepository::new(self.db)
            .get_by_server(server_id)
            .await
    }
}

fn check_label(label: &str) -> Result<(), AppError> {
    if label.chars().count() > MAX_BUTTON_LABEL_LEN {
        return Err(AppError::BadRequest(format!(
            "Button labels can be at most {} characters.",
            MAX_BUTTON_LABEL_LEN
        )));
    }
    Ok(())
}

pub(crate) fn group_not_found(group_id: &str) -> AppError {
    AppError::NotFound(format!("Group `{}` doesn't exist.", group_id))
}
