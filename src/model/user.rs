//! Per-server user usage model.

use crate::{
    error::AppError,
    util::parse::{count_from_db, parse_u64_from_string},
};

/// A user's usage state within one server.
#[derive(Debug, Clone, PartialEq)]
pub struct DispenseUser {
    /// Row id, used to key the dedupe set.
    pub id: i32,
    pub server_id: u64,
    pub user_id: u64,
    /// Successful dispenses since the last reset.
    pub usage_count: u32,
    /// Domains already handed to this user, in the order they were dispensed.
    pub used_domains: Vec<String>,
    pub banned: bool,
}

impl DispenseUser {
    /// Converts the user entity and its dedupe rows to the domain model.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `used` - Dedupe rows belonging to the user, already ordered by insertion
    ///
    /// # Returns
    /// - `Ok(DispenseUser)` - The converted model
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored IDs are not valid u64
    pub fn from_entity(
        entity: entity::server_user::Model,
        used: Vec<entity::used_domain::Model>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            user_id: parse_u64_from_string(entity.user_id)?,
            usage_count: count_from_db(entity.usage_count),
            used_domains: used.into_iter().map(|u| u.domain_name).collect(),
            banned: entity.banned,
        })
    }
}
