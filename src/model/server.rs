//! Server settings domain model.

use crate::{
    error::AppError,
    model::audit::WebhookKind,
    util::parse::{count_from_db, parse_u64_from_string},
};

/// Per-server settings: default quota and audit webhook targets.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub server_id: u64,
    /// Dispenses allowed per user per reset period without a special role.
    pub usage_per_user: u32,
    pub reports_webhook_url: Option<String>,
    pub logs_webhook_url: Option<String>,
}

impl ServerSettings {
    /// Converts an entity model to the server settings domain model.
    ///
    /// # Returns
    /// - `Ok(ServerSettings)` - The converted settings
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored server ID is not a valid u64
    pub fn from_entity(entity: entity::server::Model) -> Result<Self, AppError> {
        Ok(Self {
            server_id: parse_u64_from_string(entity.server_id)?,
            usage_per_user: count_from_db(entity.usage_per_user),
            reports_webhook_url: entity.reports_webhook_url,
            logs_webhook_url: entity.logs_webhook_url,
        })
    }

    /// Returns the configured webhook for the given audit channel, if any.
    pub fn webhook_url(&self, kind: WebhookKind) -> Option<&str> {
        match kind {
            WebhookKind::Reports => self.reports_webhook_url.as_deref(),
            WebhookKind::Logs => self.logs_webhook_url.as_deref(),
        }
    }
}

/// Parameters for replacing a server's webhook URLs.
///
/// `None` clears the corresponding webhook.
#[derive(Debug, Clone, Default)]
pub struct UpdateWebhooksParam {
    pub reports: Option<String>,
    pub logs: Option<String>,
}
