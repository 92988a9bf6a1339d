//! Dispense request, eligibility and outcome types.

/// A single dispense request from the bot layer.
#[derive(Debug, Clone)]
pub struct DispenseParam {
    pub server_id: u64,
    pub user_id: u64,
    /// Name of the group to dispense from.
    pub group_id: String,
    /// Discord roles the member currently holds.
    pub held_role_ids: Vec<u64>,
}

/// Why a user was refused a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    Banned,
    MissingRole { role_id: u64 },
    QuotaExceeded { quota: u32 },
}

/// Result of the eligibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible { quota: u32 },
    Denied(DenialReason),
}

/// A domain picked from a group's pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedDomain {
    /// Link handed to the user, always carrying a scheme.
    pub url: String,
    /// Stored form recorded in the user's dedupe set.
    pub raw: String,
}

/// A successfully dispensed and recorded domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispensedDomain {
    pub domain: String,
    pub domain_clean: String,
    pub group_id: String,
    pub remaining_uses: u32,
    /// Usage count after this dispense.
    pub usage_count: u32,
}

/// Every way a dispense request can end without an infrastructure error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispenseOutcome {
    Success(DispensedDomain),
    Denied(DenialReason),
    NoneAvailable { group_id: String },
}

fn plural(count: u32, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

impl DispenseOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn remaining_uses(&self) -> Option<u32> {
        match self {
            Self::Success(dispensed) => Some(dispensed.remaining_uses),
            _ => None,
        }
    }

    /// Text shown to the member who asked for a domain.
    pub fn user_message(&self) -> String {
        match self {
            Self::Success(d) => format!(
                "You have {} {} left this week.",
                d.remaining_uses,
                plural(d.remaining_uses, "use")
            ),
            Self::Denied(DenialReason::Banned) => {
                "You are currently banned, please contact an admin if you would like to appeal."
                    .to_string()
            }
            Self::Denied(DenialReason::MissingRole { role_id }) => format!(
                "The role <@&{}> is required to dispense from this category.",
                role_id
            ),
            Self::Denied(DenialReason::QuotaExceeded { quota }) => format!(
                "You have hit your monthly limit of {} {}. Please try again next month.",
                quota,
                plural(*quota, "Dispense")
            ),
            Self::NoneAvailable { .. } => {
                "Sorry, There are no links left in this category.".to_string()
            }
        }
    }

    /// Text written to logs and audit webhooks.
    pub fn system_message(&self) -> String {
        match self {
            Self::Success(d) => format!(
                "User has {} {} left this week.",
                d.remaining_uses,
                plural(d.remaining_uses, "use")
            ),
            Self::Denied(DenialReason::Banned) => "User is banned.".to_string(),
            Self::Denied(DenialReason::MissingRole { role_id }) => {
                format!("User doesn't have the required role (<@&{}>)", role_id)
            }
            Self::Denied(DenialReason::QuotaExceeded { quota }) => format!(
                "User has hit their monthly limit of {} {}.",
                quota,
                plural(*quota, "Dispense")
            ),
            Self::NoneAvailable { group_id } => {
                format!("User has no links left in group {}.", group_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn success(remaining_uses: u32) -> DispenseOutcome {
        DispenseOutcome::Success(DispensedDomain {
            domain: "https://a.com".to_string(),
            domain_clean: "a.com".to_string(),
            group_id: "main".to_string(),
            remaining_uses,
            usage_count: 1,
        })
    }

    #[test]
    fn pluralizes_remaining_uses() {
        assert_eq!(success(1).user_message(), "You have 1 use left this week.");
        assert_eq!(success(0).user_message(), "You have 0 uses left this week.");
        assert_eq!(success(2).system_message(), "User has 2 uses left this week.");
    }

    #[test]
    fn quota_message_carries_limit() {
        let outcome = DispenseOutcome::Denied(DenialReason::QuotaExceeded { quota: 1 });
        assert_eq!(
            outcome.user_message(),
            "You have hit your monthly limit of 1 Dispense. Please try again next month."
        );
        let outcome = DispenseOutcome::Denied(DenialReason::QuotaExceeded { quota: 3 });
        assert_eq!(
            outcome.system_message(),
            "User has hit their monthly limit of 3 Dispenses."
        );
    }

    #[test]
    fn only_success_reports_remaining_uses() {
        assert_eq!(success(4).remaining_uses(), Some(4));
        assert!(success(4).is_success());

        let none = DispenseOutcome::NoneAvailable {
            group_id: "main".to_string(),
        };
        assert_eq!(none.remaining_uses(), None);
        assert_eq!(none.system_message(), "User has no links left in group main.");
    }
}
