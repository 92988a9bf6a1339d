//! Bans.

use sea_orm::DatabaseConnection;

use crate::{
    data::{server::ServerRepository, user::UserRepository},
    error::AppError,
};

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bans a user from dispensing in a server.
    ///
    /// # Returns
    /// - `Ok(())` - The user is now banned
    /// - `Err(AppError::Conflict)` - The user was already banned
    pub async fn ban(&self, server_id: u64, user_id: u64) -> Result<(), AppError> {
        self.set_banned(server_id, user_id, true).await
    }

    /// Lifts a user's ban.
    ///
    /// # Returns
    /// - `Ok(())` - The user is no longer banned
    /// - `Err(AppError::Conflict)` - The user wasn't banned
    pub async fn unban(&self, server_id: u64, user_id: u64) -> Result<(), AppError> {
        self.set_banned(server_id, user_id, false).await
    }

    async fn set_banned(&self, server_id: u64, user_id: u64, banned: bool) -> Result<(), AppError> {
        ServerRepository::new(self.db).ensure(server_id).await?;

        let repo = UserRepository::new(self.db);
        let user = repo.ensure(server_id, user_id).await?;

        if user.banned == banned {
            let message = if banned {
                "User is already banned."
            } else {
                "User is not banned."
            };
            return Err(AppError::Conflict(message.to_string()));
        }

        repo.set_banned(server_id, user_id, banned).await?;

        tracing::info!(
            "Set banned = {} for user {} in {}",
            banned,
            user_id,
            server_id
        );

        Ok(())
    }
}
