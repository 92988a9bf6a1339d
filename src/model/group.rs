//! Domain group model, panel button metadata and parameters.

use std::{fmt, str::FromStr};

use crate::{
    error::{validation::ValidationError, AppError},
    model::domain::Domain,
    util::parse::parse_u64_from_string,
};

/// Most groups a single server may hold.
pub const MAX_GROUPS_PER_SERVER: u64 = 15;

/// Custom id prefix of panel buttons; the group name follows it.
pub const DISPENSE_BUTTON_PREFIX: &str = "dispense:";

/// Longest group name that still fits Discord's 100 character button custom id.
pub const MAX_GROUP_ID_LEN: usize = 100 - DISPENSE_BUTTON_PREFIX.len();

/// Discord's limit on button labels.
pub const MAX_BUTTON_LABEL_LEN: usize = 80;

/// Style of the panel button that dispenses from a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Success,
    Danger,
}

impl ButtonStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Success => "Success",
            Self::Danger => "Danger",
        }
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ButtonStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "secondary" => Ok(Self::Secondary),
            "success" => Ok(Self::Success),
            "danger" => Ok(Self::Danger),
            _ => Err(ValidationError::InvalidButtonStyle(s.to_string())),
        }
    }
}

/// Panel button shown for a group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupButton {
    pub label: String,
    pub style: ButtonStyle,
    pub emoji: Option<String>,
}

/// A named pool of domains within a server.
#[derive(Debug, Clone, PartialEq)]
pub struct DomainGroup {
    /// Row id, referenced by domains.
    pub id: i32,
    pub server_id: u64,
    /// Admin-chosen name, unique within the server.
    pub group_id: String,
    /// Role a user must hold to dispense from this group.
    pub required_role_id: Option<u64>,
    pub button: GroupButton,
    pub created_by: u64,
    pub updated_by: u64,
    /// Domains in insertion order.
    pub domains: Vec<Domain>,
}

impl DomainGroup {
    /// Converts a group entity and its domains to the domain model.
    ///
    /// An unrecognised stored button style falls back to `Primary` rather than
    /// failing the whole read.
    ///
    /// # Returns
    /// - `Ok(DomainGroup)` - The converted group
    /// - `Err(AppError::InternalErr(ParseStringId))` - Stored IDs are not valid u64
    pub fn from_entity(
        entity: entity::domain_group::Model,
        domains: Vec<entity::domain::Model>,
    ) -> Result<Self, AppError> {
        let required_role_id = entity
            .required_role_id
            .map(parse_u64_from_string)
            .transpose()?;
        let domains = domains
            .into_iter()
            .map(Domain::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: entity.id,
            server_id: parse_u64_from_string(entity.server_id)?,
            group_id: entity.group_id,
            required_role_id,
            button: GroupButton {
                label: entity.button_label,
                style: entity.button_style.parse().unwrap_or_default(),
                emoji: entity.button_emoji,
            },
            created_by: parse_u64_from_string(entity.created_by)?,
            updated_by: parse_u64_from_string(entity.updated_by)?,
            domains,
        })
    }

    /// Stored domain names in insertion order.
    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|d| d.domain_name.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParam {
    pub group_id: String,
    pub button: GroupButton,
    pub required_role_id: Option<u64>,
}

/// Parameters for editing a group. Fields left as `None` keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateGroupParam {
    pub button_label: Option<String>,
    pub button_style: Option<ButtonStyle>,
    pub button_emoji: Option<String>,
    pub required_role_id: Option<u64>,
}
