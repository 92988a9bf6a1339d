//! Server factory for creating test server entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test servers with customizable settings.
///
/// # Example
///
/// ```rust,ignore
/// let server = ServerFactory::new(&db)
///     .server_id("123456789")
///     .usage_per_user(3)
///     .build()
///     .await?;
/// ```
pub struct ServerFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    usage_per_user: i32,
    reports_webhook_url: Option<String>,
    logs_webhook_url: Option<String>,
}

impl<'a> ServerFactory<'a> {
    /// Creates a new ServerFactory with default values.
    ///
    /// Defaults:
    /// - server_id: auto-incremented numeric string
    /// - usage_per_user: `1`
    /// - webhook urls: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            server_id: next_id().to_string(),
            usage_per_user: 1,
            reports_webhook_url: None,
            logs_webhook_url: None,
        }
    }

    pub fn server_id(mut self, server_id: impl Into<String>) -> Self {
        self.server_id = server_id.into();
        self
    }

    pub fn usage_per_user(mut self, usage_per_user: i32) -> Self {
        self.usage_per_user = usage_per_user;
        self
    }

    pub fn reports_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.reports_webhook_url = Some(url.into());
        self
    }

    pub fn logs_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.logs_webhook_url = Some(url.into());
        self
    }

    /// Builds and inserts the server entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server::Model)` - Created server entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server::Model, DbErr> {
        entity::server::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            usage_per_user: ActiveValue::Set(self.usage_per_user),
            reports_webhook_url: ActiveValue::Set(self.reports_webhook_url),
            logs_webhook_url: ActiveValue::Set(self.logs_webhook_url),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server with default values.
///
/// Shorthand for `ServerFactory::new(db).build().await`.
pub async fn create_server(db: &DatabaseConnection) -> Result<entity::server::Model, DbErr> {
    ServerFactory::new(db).build().await
}
