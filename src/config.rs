use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

/// Weekly reset at 12:00 every Sunday (seconds-first cron syntax).
const DEFAULT_RESET_SCHEDULE: &str = "0 0 12 * * Sun";
const DEFAULT_LINKS_FILE: &str = "links.json";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Cron expression for the scheduled usage reset.
    pub reset_schedule: String,
    /// Restricts the scheduled reset to a single server when set.
    pub reset_guild_id: Option<u64>,
    /// JSON file read by `/links sync`.
    pub links_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let reset_guild_id = match std::env::var("RESET_GUILD_ID") {
            Ok(value) => Some(value.parse::<u64>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "RESET_GUILD_ID".to_string(),
                value: value.clone(),
            })?),
            Err(_) => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            reset_schedule: std::env::var("RESET_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_RESET_SCHEDULE.to_string()),
            reset_guild_id,
            links_file: std::env::var("LINKS_FILE")
                .unwrap_or_else(|_| DEFAULT_LINKS_FILE.to_string())
                .into(),
        })
    }
}
