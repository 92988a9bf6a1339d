//! Eligibility checks run before a domain is selected.
//!
//! Both functions are pure; they only read the state loaded by the caller.

use crate::model::{
    dispense::{DenialReason, Eligibility},
    group::DomainGroup,
    user::DispenseUser,
};

/// Denies banned users.
///
/// Exposed separately so the dispenser can refuse a banned user before resolving
/// the requested group.
pub fn check_ban(user: &DispenseUser) -> Option<DenialReason> {
    user.banned.then_some(DenialReason::Banned)
}

/// Evaluates whether the user may dispense from the group.
///
/// Checks run in order: ban, required role, then quota.
///
/// # Arguments
/// - `user` - The requesting user's usage state
/// - `group` - The group being dispensed from
/// - `held_role_ids` - Discord roles the member holds
/// - `quota` - Effective quota resolved for the member
///
/// # Returns
/// - `Eligibility::Eligible { quota }` - All checks passed
/// - `Eligibility::Denied(reason)` - The first failing check
pub fn evaluate(
    user: &DispenseUser,
    group: &DomainGroup,
    held_role_ids: &[u64],
    quota: u32,
) -> Eligibility {
    if let Some(reason) = check_ban(user) {
        return Eligibility::Denied(reason);
    }

    if let Some(role_id) = group.required_role_id {
        if !held_role_ids.contains(&role_id) {
            return Eligibility::Denied(DenialReason::MissingRole { role_id });
        }
    }

    if user.usage_count >= quota {
        return Eligibility::Denied(DenialReason::QuotaExceeded { quota });
    }

    Eligibility::Eligible { quota }
}
