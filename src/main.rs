mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::weekly_reset,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let (client, discord_http) = init_bot(&config, db.clone()).await?;

    // Start weekly reset scheduler
    let scheduler_db = db.clone();
    let scheduler_http = discord_http.clone();
    let scheduler_schedule = config.reset_schedule.clone();
    let scheduler_guild_id = config.reset_guild_id;
    tokio::spawn(async move {
        if let Err(e) = weekly_reset::start_scheduler(
            scheduler_db,
            scheduler_http,
            scheduler_schedule,
            scheduler_guild_id,
        )
        .await
        {
            tracing::error!("Weekly reset scheduler error: {}", e);
        }
    });

    start_bot(client).await
}
