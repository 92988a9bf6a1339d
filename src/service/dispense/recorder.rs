//! Atomic usage recording.

use sea_orm::DatabaseConnection;

use crate::{data::user::UserRepository, error::AppError};

/// Persists a successful dispense.
///
/// The write is a compare-and-set on the usage count observed during the
/// eligibility check; see [`UserRepository::record_usage`].
pub struct UsageRecorder<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UsageRecorder<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records `raw_domain` for the user and returns the new usage count.
    ///
    /// # Returns
    /// - `Ok(u32)` - `observed_count + 1`
    /// - `Err(AppError::UsageConflict)` - A concurrent dispense committed first
    /// - `Err(AppError::DbErr)` - Persistence failed; nothing was granted
    pub async fn record(
        &self,
        server_id: u64,
        user_id: u64,
        raw_domain: &str,
        observed_count: u32,
    ) -> Result<u32, AppError> {
        UserRepository::new(self.db)
            .record_usage(server_id, user_id, observed_count, raw_domain)
            .await
    }
}
