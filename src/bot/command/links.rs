//! `/links`: add, delete, list and sync the domains in each group.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed};

use crate::{
    bot::command::{options, success_embed, Invocation},
    error::AppError,
    model::{audit::AuditEvent, domain::CreateDomainParam, group::DomainGroup},
    service::{audit::notify_or_warn, domain::DomainService},
    util::domain::strip_scheme,
};

/// Embed descriptions are capped at 4096 characters.
const MAX_DESCRIPTION_LEN: usize = 4000;

fn group_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "group", "Group name").required(true)
}

fn link_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "link", "The link").required(true)
}

pub fn register() -> CreateCommand {
    CreateCommand::new("links")
        .description("Manage links")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "add", "Add a link to a group")
                .add_sub_option(group_option())
                .add_sub_option(link_option()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "delete",
                "Remove a link from a group",
            )
            .add_sub_option(group_option())
            .add_sub_option(link_option()),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List links by group",
        ))
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "sync",
            "Replace all links with the contents of the links file",
        ))
}

/// Formats groups and their domains, truncating once the embed limit is reached.
fn format_listing(groups: &[DomainGroup]) -> String {
    if groups.is_empty() {
        return "No groups yet.".to_string();
    }

    let mut out = String::new();
    for group in groups {
        let mut section = format!("**{}** ({})\n", group.group_id, group.domains.len());
        for domain in group.domain_names() {
            section.push_str(&format!("- {}\n", domain));
        }

        if out.len() + section.len() > MAX_DESCRIPTION_LEN {
            out.push_str("...");
            break;
        }
        out.push_str(&section);
    }

    out
}

pub async fn run(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let (subcommand, sub) = options::required(options::subcommand(&options), "subcommand")?;

    let service = DomainService::new(invocation.db);
    let server_id = invocation.server_id;
    let actor_id = invocation.actor_id;

    match subcommand {
        "add" => {
            let group_id = options::required(options::get_str(sub, "group"), "group")?;
            let link = options::required(options::get_str(sub, "link"), "link")?;

            let domain = service
                .create(
                    server_id,
                    actor_id,
                    CreateDomainParam {
                        group_id: group_id.to_string(),
                        domain_name: link.to_string(),
                    },
                )
                .await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::DomainAdded {
                    actor_id,
                    group_id: group_id.to_string(),
                    domain: domain.domain_name.clone(),
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Added {} to `{}`.", domain.domain_name, group_id),
            ))
        }
        "delete" => {
            let group_id = options::required(options::get_str(sub, "group"), "group")?;
            let link = options::required(options::get_str(sub, "link"), "link")?;

            service.delete(server_id, group_id, link).await?;
            let link = strip_scheme(link.trim()).trim_end_matches('/');

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::DomainRemoved {
                    actor_id,
                    group_id: group_id.to_string(),
                    domain: link.to_string(),
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Removed {} from `{}`.", link, group_id),
            ))
        }
        "list" => {
            let groups = service.list_by_group(server_id).await?;

            Ok(success_embed("Links", format_listing(&groups)))
        }
        "sync" => {
            let domain_count = service
                .sync_from_file(server_id, actor_id, invocation.links_file)
                .await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::LinksSynced {
                    actor_id,
                    domain_count,
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Synced {} links from the links file.", domain_count),
            ))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand `{}`.", other))),
    }
}
