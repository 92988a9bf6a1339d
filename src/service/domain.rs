//! Domain administration and links-file sync.

use std::{collections::HashSet, path::Path};

use sea_orm::DatabaseConnection;

use crate::{
    data::{domain::DomainRepository, group::DomainGroupRepository},
    error::AppError,
    model::{
        domain::{CreateDomainParam, Domain, LinksFile},
        group::DomainGroup,
    },
    service::group::group_not_found,
    util::domain::{normalize_domain, strip_scheme},
};

pub struct DomainService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DomainService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a domain to a group.
    ///
    /// The input is validated before the group is looked up, so a malformed domain is
    /// reported even when the group name is wrong too.
    ///
    /// # Arguments
    /// - `server_id` - Discord guild ID
    /// - `actor_id` - Discord ID of the admin adding the domain
    /// - `param` - Target group name and raw domain input; a `http(s)://` prefix is stripped
    ///
    /// # Returns
    /// - `Ok(Domain)` - The stored domain
    /// - `Err(AppError::ValidationErr(InvalidDomain))` - Not a valid hostname
    /// - `Err(AppError::NotFound)` - The group doesn't exist
    /// - `Err(AppError::Conflict)` - The group already contains the domain
    pub async fn create(
        &self,
        server_id: u64,
        actor_id: u64,
        param: CreateDomainParam,
    ) -> Result<Domain, AppError> {
        let domain_name = normalize_domain(&param.domain_name)?;

        let group = DomainGroupRepository::new(self.db)
            .find(server_id, &param.group_id)
            .await?
            .ok_or_else(|| group_not_found(&param.group_id))?;

        let repo = DomainRepository::new(self.db);
        if repo.exists_in_group(group.id, &domain_name).await? {
            return Err(AppError::Conflict(format!(
                "Domain `{}` already exists in group `{}`.",
                domain_name, group.group_id
            )));
        }

        repo.create(server_id, group.id, actor_id, &domain_name)
            .await
    }

    /// Removes a domain from a group.
    ///
    /// # Returns
    /// - `Ok(())` - The domain was removed
    /// - `Err(AppError::NotFound)` - The group or the domain doesn't exist
    pub async fn delete(
        &self,
        server_id: u64,
        group_id: &str,
        domain_name: &str,
    ) -> Result<(), AppError> {
        let group = DomainGroupRepository::new(self.db)
            .find(server_id, group_id)
            .await?
            .ok_or_else(|| group_not_found(group_id))?;

        let domain_name = strip_scheme(domain_name.trim());
        let domain_name = domain_name.strip_suffix('/').unwrap_or(domain_name);

        if !DomainRepository::new(self.db)
            .delete(group.id, domain_name)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Domain `{}` doesn't exist in group `{}`.",
                domain_name, group_id
            )));
        }

        Ok(())
    }

    /// Gets every group of the server with its domains.
    pub async fn list_by_group(&self, server_id: u64) -> Result<Vec<DomainGroup>, AppError> {
        DomainGroupRepository::new(self.db)
            .get_by_server(server_id)
            .await
    }

    /// Replaces the server's domains with the contents of a links file.
    ///
    /// See [`DomainService::sync`].
    pub async fn sync_from_file(
        &self,
        server_id: u64,
        actor_id: u64,
        path: &Path,
    ) -> Result<usize, AppError> {
        let contents = tokio::fs::read_to_string(path).await?;
        let links: LinksFile = serde_json::from_str(&contents)?;

        self.sync(server_id, actor_id, links).await
    }

    /// Replaces the server's domains with the listed ones.
    ///
    /// Every domain is validated and every group resolved before anything is
    /// written. The clear and the inserts then run in one transaction, so a bad
    /// file or a failed write leaves the server untouched. Repeated entries within
    /// a group are added once.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of domains stored
    /// - `Err(AppError::ValidationErr(InvalidDomain))` - A listed domain is malformed
    /// - `Err(AppError::NotFound)` - A listed group doesn't exist
    /// - `Err(AppError::DbErr)` - A write failed; the previous domains are kept
    pub async fn sync(
        &self,
        server_id: u64,
        actor_id: u64,
        links: LinksFile,
    ) -> Result<usize, AppError> {
        let group_repo = DomainGroupRepository::new(self.db);

        let mut planned: Vec<(i32, String)> = Vec::new();
        let mut seen: HashSet<(i32, String)> = HashSet::new();
        for entry in &links.groups {
            let group = group_repo
                .find(server_id, &entry.group_id)
                .await?
                .ok_or_else(|| group_not_found(&entry.group_id))?;

            for raw in &entry.domains {
                let domain_name = normalize_domain(raw)?;
                if seen.insert((group.id, domain_name.clone())) {
                    planned.push((group.id, domain_name));
                }
            }
        }

        let cleared = DomainRepository::new(self.db)
            .replace_all_by_server(server_id, actor_id, &planned)
            .await?;

        tracing::info!(
            "Synced links for {}: cleared {}, added {}",
            server_id,
            cleared,
            planned.len()
        );

        Ok(planned.len())
    }
}
