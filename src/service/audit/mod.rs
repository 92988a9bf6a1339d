//! Audit delivery to per-server webhooks.
//!
//! Admin actions, dispenses and link reports are posted as embeds to the server's
//! logs or reports webhook. Delivery is best effort: callers log a failed
//! notification and never undo the action that triggered it.
//!
//! - `builder` - Embed content per event
//! - `webhook` - Delivery through Discord webhooks

pub mod builder;
pub mod webhook;

use serenity::async_trait;

use crate::{error::AppError, model::audit::AuditEvent};

/// Sink for audit events.
#[async_trait]
pub trait AuditNotifier: Send + Sync {
    /// Delivers an event to the server's configured webhook for its kind.
    ///
    /// # Returns
    /// - `Ok(())` - Delivered, or skipped because no webhook is configured
    /// - `Err(AppError)` - Lookup or delivery failed
    async fn notify(&self, server_id: u64, event: AuditEvent) -> Result<(), AppError>;
}

/// Delivers an event and logs, rather than returns, any failure.
pub async fn notify_or_warn(notifier: &dyn AuditNotifier, server_id: u64, event: AuditEvent) {
    if let Err(e) = notifier.notify(server_id, event).await {
        tracing::warn!("Failed to deliver audit event for {}: {}", server_id, e);
    }
}
