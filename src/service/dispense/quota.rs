//! Effective quota resolution.

use std::collections::HashMap;

/// Resolves the member's effective quota.
///
/// Starts from the server default and raises it to the highest `special_limit`
/// among the member's configured roles. A role limit lower than the default never
/// lowers the result.
///
/// # Arguments
/// - `server_default` - The server's `usage_per_user`
/// - `held_role_ids` - Discord roles the member holds
/// - `role_table` - Configured roles of the server mapped to their special limit
pub fn resolve(
    server_default: u32,
    held_role_ids: &[u64],
    role_table: &HashMap<u64, Option<u32>>,
) -> u32 {
    held_role_ids
        .iter()
        .filter_map(|role_id| role_table.get(role_id).copied().flatten())
        .fold(server_default, u32::max)
}
