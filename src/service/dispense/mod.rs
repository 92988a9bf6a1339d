//! Domain dispensing.
//!
//! This module provides the `DispenseService`, the single entry point used by the
//! `/dispense` command and the panel buttons. A request runs through four stages,
//! each of which can end it early with a typed outcome:
//!
//! - `eligibility` - Ban, required-role and quota checks
//! - `quota` - Effective quota from the server default and role overrides
//! - `selector` - Random pick among the domains the user hasn't received
//! - `recorder` - Atomic usage increment and dedupe bookkeeping

pub mod eligibility;
pub mod quota;
pub mod recorder;
pub mod selector;

use rand::{rngs::StdRng, Rng, SeedableRng};
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        group::DomainGroupRepository, role::RoleRepository, server::ServerRepository,
        user::UserRepository,
    },
    error::AppError,
    model::dispense::{DispenseOutcome, DispenseParam, DispensedDomain, Eligibility},
    service::{dispense::recorder::UsageRecorder, group::group_not_found},
};

/// Service allocating domains from groups to users.
pub struct DispenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DispenseService<'a> {
    /// Creates a new DispenseService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Dispenses a domain using an OS-seeded random source.
    ///
    /// See [`DispenseService::dispense_with_rng`].
    pub async fn dispense(&self, param: DispenseParam) -> Result<DispenseOutcome, AppError> {
        let mut rng = StdRng::from_os_rng();
        self.dispense_with_rng(param, &mut rng).await
    }

    /// Dispenses a domain from a group to a user.
    ///
    /// The server and user are provisioned on first use. A banned user is denied
    /// before the group is looked up. A granted domain is recorded against the usage
    /// count observed during the checks, so a concurrent dispense for the same user
    /// makes this one fail with `UsageConflict` instead of exceeding the quota.
    ///
    /// # Arguments
    /// - `param` - Server, user, group name and the member's held roles
    /// - `rng` - Random source used to pick among unused domains
    ///
    /// # Returns
    /// - `Ok(DispenseOutcome::Success)` - A domain was granted and recorded
    /// - `Ok(DispenseOutcome::Denied)` - Banned, missing the required role, or out of quota
    /// - `Ok(DispenseOutcome::NoneAvailable)` - The user has received every domain in the group
    /// - `Err(AppError::BadRequest)` - Empty group name
    /// - `Err(AppError::NotFound)` - The group doesn't exist in this server
    /// - `Err(AppError::UsageConflict)` - Lost a race with another dispense for the user
    /// - `Err(AppError::DbErr)` - Database error; nothing was granted
    pub async fn dispense_with_rng<R: Rng + ?Sized>(
        &self,
        param: DispenseParam,
        rng: &mut R,
    ) -> Result<DispenseOutcome, AppError> {
        let group_id = param.group_id.trim();
        if group_id.is_empty() {
            return Err(AppError::BadRequest("No group id".to_string()));
        }

        let settings = ServerRepository::new(self.db)
            .ensure(param.server_id)
            .await?;
        let user = UserRepository::new(self.db)
            .ensure(param.server_id, param.user_id)
            .await?;

        if let Some(reason) = eligibility::check_ban(&user) {
            tracing::debug!(
                "Denied dispense for banned user {} in {}",
                param.user_id,
                param.server_id
            );
            return Ok(DispenseOutcome::Denied(reason));
        }

        let group = DomainGroupRepository::new(self.db)
            .find(param.server_id, group_id)
            .await?
            .ok_or_else(|| group_not_found(group_id))?;

        let role_table = RoleRepository::new(self.db)
            .get_special_limits(param.server_id, &param.held_role_ids)
            .await?;
        let effective_quota =
            quota::resolve(settings.usage_per_user, &param.held_role_ids, &role_table);

        let quota = match eligibility::evaluate(&user, &group, &param.held_role_ids, effective_quota)
        {
            Eligibility::Eligible { quota } => quota,
            Eligibility::Denied(reason) => {
                tracing::debug!(
                    "Denied dispense for user {} in {} from {}: {:?}",
                    param.user_id,
                    param.server_id,
                    group.group_id,
                    reason
                );
                return Ok(DispenseOutcome::Denied(reason));
            }
        };

        let Some(selected) = selector::select(group.domain_names(), &user.used_domains, rng) else {
            return Ok(DispenseOutcome::NoneAvailable {
                group_id: group.group_id,
            });
        };

        let usage_count = UsageRecorder::new(self.db)
            .record(
                param.server_id,
                param.user_id,
                &selected.raw,
                user.usage_count,
            )
            .await?;

        tracing::info!(
            "Dispensed {} from {} to user {} in {} ({}/{})",
            selected.raw,
            group.group_id,
            param.user_id,
            param.server_id,
            usage_count,
            quota
        );

        Ok(DispenseOutcome::Success(DispensedDomain {
            domain: selected.url,
            domain_clean: selected.raw,
            group_id: group.group_id,
            remaining_uses: quota.saturating_sub(usage_count),
            usage_count,
        }))
    }
}
