//! Dispensable domain model.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A domain stored in a group, without a URI scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct Domain {
    pub id: i32,
    pub server_id: u64,
    /// Row id of the owning group.
    pub group_row_id: i32,
    pub domain_name: String,
    pub created_by: u64,
    pub created_at: DateTime<Utc>,
}

impl Domain {
    pub fn from_entity(entity: entity::domain::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            group_row_id: entity.group_id,
            domain_name: entity.domain_name,
            created_by: parse_u64_from_string(entity.created_by)?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for adding a domain to a group.
///
/// `domain_name` is raw user input; it is normalized and validated before insert.
#[derive(Debug, Clone)]
pub struct CreateDomainParam {
    pub group_id: String,
    pub domain_name: String,
}

/// Contents of the links file read by `/links sync`.
///
/// ```json
/// { "groups": [{ "GroupID": "main", "domains": ["a.com", "b.com"] }] }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct LinksFile {
    pub groups: Vec<LinksFileGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinksFileGroup {
    #[serde(rename = "GroupID")]
    pub group_id: String,
    #[serde(default)]
    pub domains: Vec<String>,
}
