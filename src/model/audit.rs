//! Audit events delivered to per-server webhooks.

/// Which of a server's webhooks an event is delivered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookKind {
    Logs,
    Reports,
}

/// Something worth recording in a server's audit channel.
///
/// `actor_id` is always the Discord user who triggered the action.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditEvent {
    Dispensed {
        user_id: u64,
        group_id: String,
        domain: String,
        remaining_uses: u32,
    },
    DomainAdded {
        actor_id: u64,
        group_id: String,
        domain: String,
    },
    DomainRemoved {
        actor_id: u64,
        group_id: String,
        domain: String,
    },
    LinksSynced {
        actor_id: u64,
        domain_count: usize,
    },
    UserReset {
        actor_id: u64,
        user_id: u64,
        reset_dupes: bool,
    },
    /// `actor_id` is `None` for the scheduled weekly reset.
    AllUsersReset {
        actor_id: Option<u64>,
        reset_dupes: bool,
    },
    UserBanned {
        actor_id: u64,
        user_id: u64,
    },
    UserUnbanned {
        actor_id: u64,
        user_id: u64,
    },
    GroupCreated {
        actor_id: u64,
        group_id: String,
    },
    GroupEdited {
        actor_id: u64,
        group_id: String,
    },
    GroupDeleted {
        actor_id: u64,
        group_id: String,
    },
    RoleCreated {
        actor_id: u64,
        role_id: u64,
        special_limit: Option<u32>,
        admin_role: bool,
    },
    RoleEdited {
        actor_id: u64,
        role_id: u64,
    },
    RoleRemoved {
        actor_id: u64,
        role_id: u64,
    },
    UsageChanged {
        actor_id: u64,
        usage_per_user: u32,
    },
    LinkReported {
        reporter_id: u64,
        domain: String,
        reason: String,
    },
}

impl AuditEvent {
    /// Reports go to the reports webhook; everything else is a log entry.
    pub fn webhook_kind(&self) -> WebhookKind {
        match self {
            Self::LinkReported { .. } => WebhookKind::Reports,
            _ => WebhookKind::Logs,
        }
    }
}
