//! Domain factory for creating dispensable domains.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test domains inside an existing group.
pub struct DomainFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    group_id: i32,
    domain_name: String,
}

impl<'a> DomainFactory<'a> {
    /// Creates a new DomainFactory with default values.
    ///
    /// Defaults:
    /// - domain_name: `"domain{id}.com"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `server_id` - Server that owns the group
    /// - `group_id` - Row id of the owning group
    pub fn new(db: &'a DatabaseConnection, server_id: impl Into<String>, group_id: i32) -> Self {
        Self {
            db,
            server_id: server_id.into(),
            group_id,
            domain_name: format!("domain{}.com", next_id()),
        }
    }

    pub fn domain_name(mut self, domain_name: impl Into<String>) -> Self {
        self.domain_name = domain_name.into();
        self
    }

    pub async fn build(self) -> Result<entity::domain::Model, DbErr> {
        entity::domain::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            group_id: ActiveValue::Set(self.group_id),
            domain_name: ActiveValue::Set(self.domain_name),
            created_by: ActiveValue::Set("0".to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a domain with a generated name in the given group.
pub async fn create_domain(
    db: &DatabaseConnection,
    server_id: &str,
    group_id: i32,
) -> Result<entity::domain::Model, DbErr> {
    DomainFactory::new(db, server_id, group_id).build().await
}
