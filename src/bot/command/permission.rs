//! Admin access checks.

use sea_orm::DatabaseConnection;
use serenity::all::Member;

use crate::{error::AppError, service::role::RoleService};

/// Whether the member may use admin commands.
///
/// Members with the Discord `ADMINISTRATOR` permission always may; otherwise they
/// need one of the server's configured admin roles.
pub async fn is_admin(
    db: &DatabaseConnection,
    server_id: u64,
    member: &Member,
) -> Result<bool, AppError> {
    let is_administrator = member
        .permissions
        .is_some_and(|permissions| permissions.administrator());
    if is_administrator {
        return Ok(true);
    }

    let admin_roles = RoleService::new(db).admin_role_ids(server_id).await?;
    let held_roles: Vec<u64> = member.roles.iter().map(|role| role.get()).collect();

    Ok(has_admin_role(&held_roles, &admin_roles))
}

fn has_admin_role(held_roles: &[u64], admin_roles: &[u64]) -> bool {
    held_roles.iter().any(|role| admin_roles.contains(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_any_admin_role() {
        assert!(has_admin_role(&[1, 2, 3], &[3]));
        assert!(!has_admin_role(&[1, 2], &[3]));
        assert!(!has_admin_role(&[], &[3]));
        assert!(!has_admin_role(&[1], &[]));
    }
}
