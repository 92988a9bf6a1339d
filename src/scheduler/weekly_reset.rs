use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::server::ServerRepository,
    error::AppError,
    model::audit::AuditEvent,
    service::{
        audit::{notify_or_warn, webhook::WebhookNotifier, AuditNotifier},
        reset::ResetService,
    },
};

/// Starts the weekly usage reset scheduler
///
/// Each run clears usage counts, keeping dedupe history, for the target servers and
/// posts an `All Users Reset` entry to each server's logs webhook.
///
/// # Arguments
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for audit webhooks
/// - `schedule`: Cron expression, seconds first
/// - `reset_guild_id`: Restricts the reset to one server; every known server when `None`
pub async fn start_scheduler(
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    schedule: String,
    reset_guild_id: Option<u64>,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_http = discord_http.clone();

    let job = Job::new_async(schedule.as_str(), move |_uuid, _lock| {
        let db = job_db.clone();
        let http = job_http.clone();

        Box::pin(async move {
            let notifier = WebhookNotifier::new(&db, http);
            match run_weekly_reset(&db, &notifier, reset_guild_id).await {
                Ok(count) => tracing::info!("Weekly reset completed for {} servers", count),
                Err(e) => tracing::error!("Error running weekly reset: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Weekly reset scheduler started ({})", schedule);

    Ok(())
}

/// Resets usage for every target server.
///
/// A failure in one server is logged and does not stop the others.
///
/// # Returns
/// - `Ok(usize)` - Number of servers reset successfully
/// - `Err(AppError)` - Target servers could not be loaded
pub async fn run_weekly_reset(
    db: &DatabaseConnection,
    notifier: &dyn AuditNotifier,
    reset_guild_id: Option<u64>,
) -> Result<usize, AppError> {
    let server_ids = match reset_guild_id {
        Some(server_id) => vec![server_id],
        None => ServerRepository::new(db).get_all_ids().await?,
    };

    let service = ResetService::new(db);
    let mut completed = 0;

    for server_id in server_ids {
        if let Err(e) = service.reset_all(server_id, false).await {
            tracing::error!("Weekly reset failed for server {}: {}", server_id, e);
            continue;
        }

        notify_or_warn(
            notifier,
            server_id,
            AuditEvent::AllUsersReset {
                actor_id: None,
                reset_dupes: false,
            },
        )
        .await;
        completed += 1;
    }

    Ok(completed)
}
