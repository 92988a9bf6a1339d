//! Error types and user-facing message mapping.
//!
//! `AppError` is the top-level error type returned by repositories and services.
//! Expected dispense refusals (bans, quota, missing roles, empty pools) are not
//! errors; they are `DispenseOutcome` variants. Everything here is either a
//! configuration problem the admin should see, a validation failure, or an
//! infrastructure failure that gets logged and reported generically.

pub mod config;
pub mod internal;
pub mod validation;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, validation::ValidationError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Failure reading the links file during a sync.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Malformed links file.
    #[error(transparent)]
    JsonErr(#[from] serde_json::Error),

    /// Input failed validation; nothing was written.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Unexpected internal state, see [`InternalError`].
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// The usage row changed between the quota check and the write.
    ///
    /// Another dispense for the same user committed first; no domain was granted.
    #[error("Usage for user {user_id} in server {server_id} changed during dispense")]
    UsageConflict { server_id: u64, user_id: u64 },

    /// Resource not found error.
    #[error("{0}")]
    NotFound(String),

    /// Resource already exists or is already in the requested state.
    #[error("{0}")]
    Conflict(String),

    /// Invalid request error.
    #[error("{0}")]
    BadRequest(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Converts the error into text safe to show the invoking Discord user.
    ///
    /// Configuration and validation errors carry admin-facing messages and are shown
    /// verbatim. A usage conflict asks the user to retry. All other variants are logged
    /// in full and replaced with a generic message to avoid leaking internals.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::Conflict(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::ValidationErr(err) => err.to_string(),
            Self::UsageConflict { .. } => {
                "Your request overlapped with another one, please try again.".to_string()
            }
            err => {
                tracing::error!("{}", err);
                "Something went wrong, please try again later.".to_string()
            }
        }
    }
}
