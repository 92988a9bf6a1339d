//! Webhook-backed audit notifier.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{ExecuteWebhook, Webhook},
    async_trait,
    http::Http,
};

use crate::{
    data::server::ServerRepository,
    error::AppError,
    model::audit::AuditEvent,
    service::audit::{builder::build_audit_embed, AuditNotifier},
};

/// Name the bot posts under in audit channels.
const WEBHOOK_USERNAME: &str = "Dispenser";

/// Posts audit events to the server's logs or reports webhook.
pub struct WebhookNotifier<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> WebhookNotifier<'a> {
    /// Creates a new WebhookNotifier instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection, used to look up webhook URLs
    /// - `http` - Arc-wrapped Discord HTTP client for executing webhooks
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }
}

#[async_trait]
impl AuditNotifier for WebhookNotifier<'_> {
    async fn notify(&self, server_id: u64, event: AuditEvent) -> Result<(), AppError> {
        let kind = event.webhook_kind();

        let settings = ServerRepository::new(self.db).find(server_id).await?;
        let Some(url) = settings.as_ref().and_then(|s| s.webhook_url(kind)) else {
            tracing::debug!("No {:?} webhook configured for {}, skipping", kind, server_id);
            return Ok(());
        };

        let webhook = Webhook::from_url(&self.http, url).await?;
        let message = ExecuteWebhook::new()
            .username(WEBHOOK_USERNAME)
            .embed(build_audit_embed(&event));

        webhook.execute(&self.http, false, message).await?;

        Ok(())
    }
}
