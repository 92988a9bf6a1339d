//! Usage resets.

use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::AppError};

pub struct ResetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResetService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Zeroes one user's usage count.
    ///
    /// A user with no record has nothing to reset and is not created.
    ///
    /// # Arguments
    /// - `reset_dupes` - Also forget which domains the user has received
    pub async fn reset_user(
        &self,
        server_id: u64,
        user_id: u64,
        reset_dupes: bool,
    ) -> Result<(), AppError> {
        let reset = UserRepository::new(self.db)
            .reset_user(server_id, user_id, reset_dupes)
            .await?;

        if !reset {
            tracing::debug!("No usage to reset for user {} in {}", user_id, server_id);
        }

        Ok(())
    }

    /// Zeroes every user's usage count in a server.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of users reset
    pub async fn reset_all(&self, server_id: u64, reset_dupes: bool) -> Result<u64, AppError> {
        let count = UserRepository::new(self.db)
            .reset_all(server_id, reset_dupes)
            .await?;

        tracing::info!(
            "Reset usage of {} users in {} (dupes: {})",
            count,
            server_id,
            reset_dupes
        );

        Ok(count)
    }
}
