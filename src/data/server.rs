//! Server repository for settings and lazy provisioning.
//!
//! Servers are created on first reference through [`ServerRepository::ensure`], which is
//! idempotent and safe to call at the start of every request.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QuerySelect,
};

use crate::{
    error::AppError,
    model::server::{ServerSettings, UpdateWebhooksParam},
    util::parse::{count_to_db, parse_u64_from_string},
};

/// Default quota given to newly provisioned servers.
pub const DEFAULT_USAGE_PER_USER: i32 = 1;

pub struct ServerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the server's settings, creating the server with defaults if it is unknown.
    ///
    /// Concurrent callers racing to create the same server are resolved by the primary
    /// key; the losing insert is ignored and both read the same row.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - Existing or newly created settings
    /// - `Err(AppError::DbErr)` - Database error during insert or read
    pub async fn ensure(&self, server_id: u64) -> Result<ServerSettings, AppError> {
        if let Some(settings) = self.find(server_id).await? {
            return Ok(settings);
        }

        entity::prelude::Server::insert(entity::server::ActiveModel {
            server_id: ActiveValue::Set(server_id.to_string()),
            usage_per_user: ActiveValue::Set(DEFAULT_USAGE_PER_USER),
            reports_webhook_url: ActiveValue::Set(None),
            logs_webhook_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::column(entity::server::Column::ServerId)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find(server_id).await?.ok_or_else(|| {
            DbErr::RecordNotFound(format!("Server {} not found after creation", server_id))
                .into()
        })
    }

    /// Finds a server's settings without creating it.
    pub async fn find(&self, server_id: u64) -> Result<Option<ServerSettings>, AppError> {
        let entity = entity::prelude::Server::find_by_id(server_id.to_string())
            .one(self.db)
            .await?;

        entity.map(ServerSettings::from_entity).transpose()
    }

    /// Sets the default per-user quota.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID, which must already exist
    /// - `usage_per_user` - New default quota
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - Settings after the update
    /// - `Err(AppError::NotFound)` - Server does not exist
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_usage_per_user(
        &self,
        server_id: u64,
        usage_per_user: u32,
    ) -> Result<ServerSettings, AppError> {
        entity::prelude::Server::update_many()
            .col_expr(
                entity::server::Column::UsagePerUser,
                Expr::value(count_to_db(usage_per_user)),
            )
            .filter(entity::server::Column::ServerId.eq(server_id.to_string()))
            .exec(self.db)
            .await?;

        self.find(server_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server {} doesn't exist.", server_id)))
    }

    /// Replaces both webhook URLs; `None` clears a webhook.
    pub async fn set_webhook_urls(
        &self,
        server_id: u64,
        param: UpdateWebhooksParam,
    ) -> Result<ServerSettings, AppError> {
        entity::prelude::Server::update_many()
            .col_expr(
                entity::server::Column::ReportsWebhookUrl,
                Expr::value(param.reports),
            )
            .col_expr(entity::server::Column::LogsWebhookUrl, Expr::value(param.logs))
            .filter(entity::server::Column::ServerId.eq(server_id.to_string()))
            .exec(self.db)
            .await?;

        self.find(server_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Server {} doesn't exist.", server_id)))
    }

    /// Gets the IDs of every known server.
    pub async fn get_all_ids(&self) -> Result<Vec<u64>, AppError> {
        let ids: Vec<String> = entity::prelude::Server::find()
            .select_only()
            .column(entity::server::Column::ServerId)
            .into_tuple()
            .all(self.db)
            .await?;

        ids.into_iter().map(parse_u64_from_string).collect()
    }
}
