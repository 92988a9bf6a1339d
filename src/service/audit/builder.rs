//! Audit embed content.
//!
//! [`describe`] turns an event into plain title, description and field text so the
//! wording can be checked without Discord types; [`build_audit_embed`] renders it.

use serenity::all::{CreateEmbed, Timestamp};

use crate::model::audit::AuditEvent;

/// Color for routine log entries.
pub const DEFAULT_COLOR: u32 = 0x5865F2;
/// Color for destructive actions and reports.
pub const ALERT_COLOR: u32 = 0xED4245;

/// Text content of one audit embed.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<(&'static str, String)>,
    pub color: u32,
}

impl AuditEntry {
    fn new(title: &str, color: u32) -> Self {
        Self {
            title: title.to_string(),
            description: None,
            fields: Vec::new(),
            color,
        }
    }

    fn description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }
}

fn user(id: u64) -> String {
    format!("<@{}> ({})", id, id)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Describes an audit event.
pub fn describe(event: &AuditEvent) -> AuditEntry {
    match event {
        AuditEvent::Dispensed {
            user_id,
            group_id,
            domain,
            remaining_uses,
        } => AuditEntry::new("Link Dispensed", DEFAULT_COLOR)
            .field("User", user(*user_id))
            .field("Group", group_id.clone())
            .field("Link", domain.clone())
            .field("Uses Left", remaining_uses.to_string()),
        AuditEvent::DomainAdded {
            actor_id,
            group_id,
            domain,
        } => AuditEntry::new("Link Added", DEFAULT_COLOR)
            .field("Link", domain.clone())
            .field("Group", group_id.clone())
            .field("Added By", user(*actor_id)),
        AuditEvent::DomainRemoved {
            actor_id,
            group_id,
            domain,
        } => AuditEntry::new("Link Removed", ALERT_COLOR)
            .field("Link", domain.clone())
            .field("Group", group_id.clone())
            .field("Removed By", user(*actor_id)),
        AuditEvent::LinksSynced {
            actor_id,
            domain_count,
        } => AuditEntry::new("Links Synced", DEFAULT_COLOR).description(format!(
            "All links have been synced by {} ({} links).",
            user(*actor_id),
            domain_count
        )),
        AuditEvent::UserReset {
            actor_id,
            user_id,
            reset_dupes,
        } => AuditEntry::new("User Reset", DEFAULT_COLOR)
            .field("User", user(*user_id))
            .field("Reset Dupes", yes_no(*reset_dupes))
            .field("Reset By", user(*actor_id)),
        AuditEvent::AllUsersReset {
            actor_id,
            reset_dupes,
        } => {
            let reset_by = match actor_id {
                Some(id) => user(*id),
                None => "Weekly schedule".to_string(),
            };
            AuditEntry::new("All Users Reset", DEFAULT_COLOR)
                .field("Reset By", reset_by)
                .field("Reset Dupes", yes_no(*reset_dupes))
        }
        AuditEvent::UserBanned { actor_id, user_id } => {
            AuditEntry::new("User Banned", ALERT_COLOR)
                .field("User", user(*user_id))
                .field("Banned By", user(*actor_id))
        }
        AuditEvent::UserUnbanned { actor_id, user_id } => {
            AuditEntry::new("User Unbanned", DEFAULT_COLOR)
                .field("User", user(*user_id))
                .field("Unbanned By", user(*actor_id))
        }
        AuditEvent::GroupCreated { actor_id, group_id } => {
            AuditEntry::new("Group Created", DEFAULT_COLOR)
                .field("Group", group_id.clone())
                .field("Created By", user(*actor_id))
        }
        AuditEvent::GroupEdited { actor_id, group_id } => {
            AuditEntry::new("Group Edited", DEFAULT_COLOR)
                .field("Group", group_id.clone())
                .field("Edited By", user(*actor_id))
        }
        AuditEvent::GroupDeleted { actor_id, group_id } => {
            AuditEntry::new("Group Deleted", ALERT_COLOR)
                .field("Group", group_id.clone())
                .field("Deleted By", user(*actor_id))
        }
        AuditEvent::RoleCreated {
            actor_id,
            role_id,
            special_limit,
            admin_role,
        } => AuditEntry::new("Role Created", DEFAULT_COLOR)
            .field("Role", format!("<@&{}>", role_id))
            .field(
                "Special Limit",
                special_limit.map_or_else(|| "None".to_string(), |l| l.to_string()),
            )
            .field("Admin", yes_no(*admin_role))
            .field("Created By", user(*actor_id)),
        AuditEvent::RoleEdited { actor_id, role_id } => {
            AuditEntry::new("Role Edited", DEFAULT_COLOR)
                .field("Role", format!("<@&{}>", role_id))
                .field("Edited By", user(*actor_id))
        }
        AuditEvent::RoleRemoved { actor_id, role_id } => {
            AuditEntry::new("Role Removed", ALERT_COLOR)
                .field("Role", format!("<@&{}>", role_id))
                .field("Removed By", user(*actor_id))
        }
        AuditEvent::UsageChanged {
            actor_id,
            usage_per_user,
        } => AuditEntry::new("Usage Changed", DEFAULT_COLOR)
            .field("Usage Per User", usage_per_user.to_string())
            .field("Changed By", user(*actor_id)),
        AuditEvent::LinkReported {
            reporter_id,
            domain,
            reason,
        } => AuditEntry::new("Link Reported", ALERT_COLOR)
            .field("Link", domain.clone())
            .field("Reason", reason.clone())
            .field("Reported By", user(*reporter_id)),
    }
}

/// Builds the Discord embed posted for an audit event.
pub fn build_audit_embed(event: &AuditEvent) -> CreateEmbed {
    let entry = describe(event);

    let mut embed = CreateEmbed::new()
        .title(entry.title)
        .color(entry.color)
        .timestamp(Timestamp::now());

    if let Some(description) = entry.description {
        embed = embed.description(description);
    }

    for (name, value) in entry.fields {
        embed = embed.field(name, value, true);
    }

    embed
}
