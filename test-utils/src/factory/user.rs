//! User factory for creating per-server usage records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable usage state.
///
/// Any `used_domains` are inserted as dedupe rows after the user row.
///
/// # Example
///
/// ```rust,ignore
/// let user = UserFactory::new(&db, &server.server_id)
///     .user_id("42")
///     .usage_count(1)
///     .used_domains(["a.com"])
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    user_id: String,
    usage_count: i32,
    banned: bool,
    used_domains: Vec<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented numeric string
    /// - usage_count: `0`
    /// - banned: `false`
    /// - used_domains: empty
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - Server the user belongs to
    pub fn new(db: &'a DatabaseConnection, server_id: impl Into<String>) -> Self {
        Self {
            db,
            server_id: server_id.into(),
            user_id: next_id().to_string(),
            usage_count: 0,
            banned: false,
            used_domains: Vec::new(),
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn usage_count(mut self, usage_count: i32) -> Self {
        self.usage_count = usage_count;
        self
    }

    pub fn banned(mut self, banned: bool) -> Self {
        self.banned = banned;
        self
    }

    pub fn used_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.used_domains = domains.into_iter().map(Into::into).collect();
        self
    }

    /// Builds and inserts the user and its dedupe rows.
    ///
    /// # Returns
    /// - `Ok(entity::server_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server_user::Model, DbErr> {
        let user = entity::server_user::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            user_id: ActiveValue::Set(self.user_id),
            usage_count: ActiveValue::Set(self.usage_count),
            banned: ActiveValue::Set(self.banned),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for domain_name in self.used_domains {
            entity::used_domain::ActiveModel {
                server_user_id: ActiveValue::Set(user.id),
                domain_name: ActiveValue::Set(domain_name),
                used_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(user)
    }
}

/// Creates a user with default values in the given server.
pub async fn create_user(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::server_user::Model, DbErr> {
    UserFactory::new(db, server_id).build().await
}
