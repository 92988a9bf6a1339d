//! Server settings: default quota and webhook targets.

use sea_orm::DatabaseConnection;
use url::Url;

use crate::{
    data::server::ServerRepository,
    error::{validation::ValidationError, AppError},
    model::server::{ServerSettings, UpdateWebhooksParam},
};

pub struct SettingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a server's settings, provisioning the server with defaults if needed.
    pub async fn get(&self, server_id: u64) -> Result<ServerSettings, AppError> {
        ServerRepository::new(self.db).ensure(server_id).await
    }

    /// Sets the default number of dispenses per user per reset period.
    pub async fn set_usage_per_user(
        &self,
        server_id: u64,
        usage_per_user: u32,
    ) -> Result<ServerSettings, AppError> {
        let repo = ServerRepository::new(self.db);
        repo.ensure(server_id).await?;
        repo.set_usage_per_user(server_id, usage_per_user).await
    }

    /// Replaces the server's webhook URLs.
    ///
    /// Both URLs are validated before either is written. Blank input clears the
    /// webhook, the same as `None`.
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - Settings after the update
    /// - `Err(AppError::ValidationErr(InvalidWebhookUrl))` - A URL is not an absolute https URL
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_webhook_urls(
        &self,
        server_id: u64,
        param: UpdateWebhooksParam,
    ) -> Result<ServerSettings, AppError> {
        let param = UpdateWebhooksParam {
            reports: validate_webhook_url(param.reports)?,
            logs: validate_webhook_url(param.logs)?,
        };

        let repo = ServerRepository::new(self.db);
        repo.ensure(server_id).await?;
        repo.set_webhook_urls(server_id, param).await
    }
}

fn validate_webhook_url(value: Option<String>) -> Result<Option<String>, ValidationError> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match Url::parse(&value) {
        Ok(url) if url.scheme() == "https" && url.has_host() => Ok(Some(value)),
        _ => Err(ValidationError::InvalidWebhookUrl(value)),
    }
}
