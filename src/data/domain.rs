//! Domain repository for database operations.
//!
//! Domain names reaching this layer are already normalized and validated; the
//! repository stores them verbatim.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::{error::AppError, model::domain::Domain};

pub struct DomainRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DomainRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a domain to a group.
    ///
    /// # Arguments
    /// - `server_id` - Server owning the group
    /// - `group_row_id` - Row id of the group
    /// - `actor_id` - Discord ID of the admin adding the domain
    /// - `domain_name` - Normalized domain name
    ///
    /// # Returns
    /// - `Ok(Domain)` - The created domain
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(
        &self,
        server_id: u64,
        group_row_id: i32,
        actor_id: u64,
        domain_name: &str,
    ) -> Result<Domain, AppError> {
        let entity = insert_domain(self.db, server_id, group_row_id, actor_id, domain_name).await?;

        Domain::from_entity(entity)
    }

    pub async fn exists_in_group(
        &self,
        group_row_id: i32,
        domain_name: &str,
    ) -> Result<bool, AppError> {
        let count = entity::prelude::Domain::find()
            .filter(entity::domain::Column::GroupId.eq(group_row_id))
            .filter(entity::domain::Column::DomainName.eq(domain_name))
            .count(self.db)
            .await?;
        Ok(count > 0)
    }

    /// Removes a domain from a group.
    ///
    /// # Returns
    /// - `Ok(true)` - The domain was removed
    /// - `Ok(false)` - The group did not contain the domain
    pub async fn delete(&self, group_row_id: i32, domain_name: &str) -> Result<bool, AppError> {
        let result = entity::prelude::Domain::delete_many()
            .filter(entity::domain::Column::GroupId.eq(group_row_id))
            .filter(entity::domain::Column::DomainName.eq(domain_name))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Replaces every domain of a server with the given set in one transaction.
    ///
    /// If any insert fails the transaction is rolled back and the server keeps
    /// its previous domains.
    ///
    /// # Arguments
    /// - `server_id` - Server whose domains are replaced
    /// - `actor_id` - Discord ID of the admin running the sync
    /// - `domains` - `(group row id, normalized domain name)` pairs to store
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of domains removed before the new set was stored
    /// - `Err(AppError::DbErr)` - Database error; nothing was changed
    pub async fn replace_all_by_server(
        &self,
        server_id: u64,
        actor_id: u64,
        domains: &[(i32, String)],
    ) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let cleared = entity::prelude::Domain::delete_many()
            .filter(entity::domain::Column::ServerId.eq(server_id.to_string()))
            .exec(&txn)
            .await?
            .rows_affected;

        for (group_row_id, domain_name) in domains {
            insert_domain(&txn, server_id, *group_row_id, actor_id, domain_name).await?;
        }

        txn.commit().await?;

        Ok(cleared)
    }

    pub async fn count_by_server(&self, server_id: u64) -> Result<u64, AppError> {
        Ok(entity::prelude::Domain::find()
            .filter(entity::domain::Column::ServerId.eq(server_id.to_string()))
            .count(self.db)
            .await?)
    }
}

async fn insert_domain<C: ConnectionTrait>(
    db: &C,
    server_id: u64,
    group_row_id: i32,
    actor_id: u64,
    domain_name: &str,
) -> Result<entity::domain::Model, DbErr> {
    entity::domain::ActiveModel {
        server_id: ActiveValue::Set(server_id.to_string()),
        group_id: ActiveValue::Set(group_row_id),
        domain_name: ActiveValue::Set(domain_name.to_string()),
        created_by: ActiveValue::Set(actor_id.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
