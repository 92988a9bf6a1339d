use std::sync::Arc;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{Client, GatewayIntents},
    http::Http,
};

use crate::{bot::handler::Handler, config::Config, error::AppError};

/// Builds the Discord client and returns it together with its HTTP client.
///
/// The HTTP client is returned separately so other components (the reset scheduler)
/// can deliver audit webhooks without a second connection.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token and links file path
/// - `db` - Database connection for the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to start and its shared HTTP client
/// - `Err(AppError::DiscordErr)` - Client construction failed
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
) -> Result<(Client, Arc<Http>), AppError> {
    let intents = GatewayIntents::GUILDS;

    let handler = Handler::new(db, config.links_file.clone());

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Starts the Discord bot, blocking until it shuts down.
///
/// Should be called from within a `tokio::spawn` task.
///
/// # Returns
/// - `Ok(())` - The bot shut down cleanly
/// - `Err(AppError::DiscordErr)` - The gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
