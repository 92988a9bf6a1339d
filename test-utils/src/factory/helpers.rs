//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a group in the given server populated with the provided domains.
///
/// Domains are inserted in slice order, so their ids follow that order.
///
/// # Arguments
/// - `db` - Database connection
/// - `server_id` - Owning server, which must already exist
/// - `domains` - Domain names to add to the new group
///
/// # Returns
/// - `Ok((group, domains))` - The created group and its domain rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_group_with_domains(
    db: &DatabaseConnection,
    server_id: &str,
    domains: &[&str],
) -> Result<(entity::domain_group::Model, Vec<entity::domain::Model>), DbErr> {
    let group = crate::factory::group::create_group(db, server_id).await?;

    let mut created = Vec::with_capacity(domains.len());
    for name in domains {
        let domain = crate::factory::domain::DomainFactory::new(db, server_id, group.id)
            .domain_name(*name)
            .build()
            .await?;
        created.push(domain);
    }

    Ok((group, created))
}
