//! Domain group factory for creating test groups.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test domain groups with customizable gating and button metadata.
///
/// # Example
///
/// ```rust,ignore
/// let group = GroupFactory::new(&db, &server.server_id)
///     .group_id("premium")
///     .required_role_id("555")
///     .build()
///     .await?;
/// ```
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    server_id: String,
    group_id: String,
    required_role_id: Option<String>,
    button_label: String,
    button_style: String,
    button_emoji: Option<String>,
}

impl<'a> GroupFactory<'a> {
    /// Creates a new GroupFactory with default values.
    ///
    /// Defaults:
    /// - group_id: `"group_{id}"`
    /// - required_role_id: `None`
    /// - button_label: `"Group {id}"`
    /// - button_style: `"Primary"`
    /// - button_emoji: `None`
    pub fn new(db: &'a DatabaseConnection, server_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            server_id: server_id.into(),
            group_id: format!("group_{}", id),
            required_role_id: None,
            button_label: format!("Group {}", id),
            button_style: "Primary".to_string(),
            button_emoji: None,
        }
    }

    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    pub fn required_role_id(mut self, role_id: impl Into<String>) -> Self {
        self.required_role_id = Some(role_id.into());
        self
    }

    pub fn button_label(mut self, label: impl Into<String>) -> Self {
        self.button_label = label.into();
        self
    }

    pub fn button_style(mut self, style: impl Into<String>) -> Self {
        self.button_style = style.into();
        self
    }

    pub fn button_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.button_emoji = Some(emoji.into());
        self
    }

    pub async fn build(self) -> Result<entity::domain_group::Model, DbErr> {
        let now = Utc::now();
        entity::domain_group::ActiveModel {
            server_id: ActiveValue::Set(self.server_id),
            group_id: ActiveValue::Set(self.group_id),
            required_role_id: ActiveValue::Set(self.required_role_id),
            button_label: ActiveValue::Set(self.button_label),
            button_style: ActiveValue::Set(self.button_style),
            button_emoji: ActiveValue::Set(self.button_emoji),
            created_by: ActiveValue::Set("0".to_string()),
            updated_by: ActiveValue::Set("0".to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values in the given server.
pub async fn create_group(
    db: &DatabaseConnection,
    server_id: &str,
) -> Result<entity::domain_group::Model, DbErr> {
    GroupFactory::new(db, server_id).build().await
}
