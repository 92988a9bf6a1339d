//! Domain group repository for database operations
//!
//! Provides the `DomainGroupRepository` for managing domain groups in the database.
//! Groups are always returned together with their domains, ordered by insertion, so the
//! dispense path can read a group's whole pool in one call.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::{
    error::AppError,
    model::group::{CreateGroupParam, DomainGroup, UpdateGroupParam},
};

/// Repository providing database operations for domain group management.
pub struct DomainGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DomainGroupRepository<'a> {
    /// Creates a new DomainGroupRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DomainGroupRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new, empty domain group
    ///
    /// # Arguments
    /// - `server_id` - The ID of the server the group belongs to
    /// - `actor_id` - Discord ID of the admin creating the group
    /// - `param` - Create parameters containing the group name and button metadata
    ///
    /// # Returns
    /// - `Ok(DomainGroup)` - The created group with no domains
    /// - `Err(AppError::DbErr)` - Database error during insert operation
    pub async fn create(
        &self,
        server_id: u64,
        actor_id: u64,
        param: CreateGroupParam,
    ) -> Result<DomainGroup, AppError> {
        let now = Utc::now();
        let entity = entity::domain_group::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            group_id: ActiveValue::Set(param.group_id),
            required_role_id: ActiveValue::Set(param.required_role_id.map(|id| id.to_string())),
            button_label: ActiveValue::Set(param.button.label),
            button_style: ActiveValue::Set(param.button.style.as_str().to_string()),
            button_emoji: ActiveValue::Set(param.button.emoji),
            created_by: ActiveValue::Set(actor_id.to_string()),
            updated_by: ActiveValue::Set(actor_id.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        DomainGroup::from_entity(entity, Vec::new())
    }

    /// Finds a group by name together with its domains
    ///
    /// # Arguments
    /// - `server_id` - The ID of the server the group belongs to
    /// - `group_id` - Name of the group to retrieve
    ///
    /// # Returns
    /// - `Ok(Some(DomainGroup))` - The requested group if found
    /// - `Ok(None)` - The requested group does not exist
    /// - `Err(AppError::DbErr)` - Database error during get operation
    pub async fn find(
        &self,
        server_id: u64,
        group_id: &str,
    ) -> Result<Option<DomainGroup>, AppError> {
        let Some(entity) = self.find_entity(server_id, group_id).await? else {
            return Ok(None);
        };

        let domains = entity::prelude::Domain::find()
            .filter(entity::domain::Column::GroupId.eq(entity.id))
            .order_by_asc(entity::domain::Column::Id)
            .all(self.db)
            .await?;

        DomainGroup::from_entity(entity, domains).map(Some)
    }

    /// Updates the provided fields of a group
    ///
    /// # Arguments
    /// - `server_id` - The ID of the server the group belongs to
    /// - `group_id` - Name of the group to update
    /// - `actor_id` - Discord ID of the admin making the change
    /// - `param` - Fields to overwrite; `None` keeps the stored value
    ///
    /// # Returns
    /// - `Ok(Some(DomainGroup))` - The updated group
    /// - `Ok(None)` - The group does not exist
    /// - `Err(AppError::DbErr)` - Database error during update operation
    pub async fn update(
        &self,
        server_id: u64,
        group_id: &str,
        actor_id: u64,
        param: UpdateGroupParam,
    ) -> Result<Option<DomainGroup>, AppError> {
        let Some(entity) = self.find_entity(server_id, group_id).await? else {
            return Ok(None);
        };

        let mut active = entity.into_active_model();
        active.updated_by = ActiveValue::Set(actor_id.to_string());
        active.updated_at = ActiveValue::Set(Utc::now());
        if let Some(label) = param.button_label {
            active.button_label = ActiveValue::Set(label);
        }
        if let Some(style) = param.button_style {
            active.button_style = ActiveValue::Set(style.as_str().to_string());
        }
        if let Some(emoji) = param.button_emoji {
            active.button_emoji = ActiveValue::Set(Some(emoji));
        }
        if let Some(role_id) = param.required_role_id {
            active.required_role_id = ActiveValue::Set(Some(role_id.to_string()));
        }
        active.update(self.db).await?;

        self.find(server_id, group_id).await
    }

    /// Deletes a group together with its domains
    ///
    /// # Returns
    /// - `Ok(true)` - The group was deleted
    /// - `Ok(false)` - The group did not exist
    /// - `Err(AppError::DbErr)` - Database error during delete operation
    pub async fn delete(&self, server_id: u64, group_id: &str) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        let Some(entity) = entity::prelude::DomainGroup::find()
            .filter(entity::domain_group::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::domain_group::Column::GroupId.eq(group_id))
            .one(&txn)
            .await?
        else {
            return Ok(false);
        };

        entity::prelude::Domain::delete_many()
            .filter(entity::domain::Column::GroupId.eq(entity.id))
            .exec(&txn)
            .await?;
        entity::prelude::DomainGroup::delete_by_id(entity.id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Gets every group of a server with its domains, in creation order
    pub async fn get_by_server(&self, server_id: u64) -> Result<Vec<DomainGroup>, AppError> {
        let groups = entity::prelude::DomainGroup::find()
            .filter(entity::domain_group::Column::ServerId.eq(server_id.to_string()))
            .order_by_asc(entity::domain_group::Column::Id)
            .all(self.db)
            .await?;

        if groups.is_empty() {
            return Ok(Vec::new());
        }

        let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
        let domains = entity::prelude::Domain::find()
            .filter(entity::domain::Column::GroupId.is_in(group_ids))
            .order_by_asc(entity::domain::Column::Id)
            .all(self.db)
            .await?;

        let mut by_group: HashMap<i32, Vec<entity::domain::Model>> = HashMap::new();
        for domain in domains {
            by_group.entry(domain.group_id).or_default().push(domain);
        }

        groups
            .into_iter()
            .map(|group| {
                let domains = by_group.remove(&group.id).unwrap_or_default();
                DomainGroup::from_entity(group, domains)
            })
            .collect()
    }

    /// Counts the groups of a server
    pub async fn count_by_server(&self, server_id: u64) -> Result<u64, AppError> {
        Ok(entity::prelude::DomainGroup::find()
            .filter(entity::domain_group::Column::ServerId.eq(server_id.to_string()))
            .count(self.db)
            .await?)
    }

    async fn find_entity(
        &self,
        server_id: u64,
        group_id: &str,
    ) -> Result<Option<entity::domain_group::Model>, AppError> {
        Ok(entity::prelude::DomainGroup::find()
            .filter(entity::domain_group::Column::ServerId.eq(server_id.to_string()))
            .filter(entity::domain_group::Column::GroupId.eq(group_id))
            .one(self.db)
            .await?)
    }
}
