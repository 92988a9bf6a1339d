//! `/config`: per-server usage limit and audit webhooks.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed};

use crate::{
    bot::command::{options, success_embed, Invocation},
    error::AppError,
    model::{
        audit::AuditEvent,
        server::{ServerSettings, UpdateWebhooksParam},
    },
    service::{audit::notify_or_warn, settings::SettingsService},
    util::parse::MAX_STORED_COUNT,
};

/// Value that clears a webhook when passed to `/config webhooks`.
const CLEAR_WEBHOOK: &str = "none";

pub fn register() -> CreateCommand {
    CreateCommand::new("config")
        .description("Server settings")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "usage",
                "Set how many links each user gets per reset period",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::Integer, "amount", "Links per user")
                    .min_int_value(0)
                    .max_int_value(MAX_STORED_COUNT as u64)
                    .required(true),
            ),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "webhooks",
                "Set the reports and logs webhooks, `none` to clear",
            )
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::String,
                "reports",
                "Webhook URL for link reports",
            ))
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::String,
                "logs",
                "Webhook URL for the audit log",
            )),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "view",
            "Show current settings",
        ))
}

/// Resolves a webhook option against its current value.
///
/// # Arguments
/// - `input` - Option as given, `None` when omitted
/// - `current` - Currently stored URL
///
/// # Returns
/// The URL to store; omitted keeps `current`, `none` clears it.
fn resolve_webhook(input: Option<&str>, current: Option<String>) -> Option<String> {
    match input.map(str::trim) {
        None => current,
        Some(value) if value.eq_ignore_ascii_case(CLEAR_WEBHOOK) => None,
        Some(value) => Some(value.to_string()),
    }
}

fn describe_settings(settings: &ServerSettings) -> String {
    let show = |url: &Option<String>| {
        if url.is_some() {
            "configured"
        } else {
            "not set"
        }
    };

    format!(
        "Links per user: {}\nReports webhook: {}\nLogs webhook: {}",
        settings.usage_per_user,
        show(&settings.reports_webhook_url),
        show(&settings.logs_webhook_url)
    )
}

pub async fn run(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let (subcommand, sub) = options::required(options::subcommand(&options), "subcommand")?;

    let service = SettingsService::new(invocation.db);
    let server_id = invocation.server_id;

    match subcommand {
        "usage" => {
            let amount = options::required(options::get_int(sub, "amount"), "amount")?;
            let usage_per_user = options::to_count(amount, "amount")?;

            let settings = service.set_usage_per_user(server_id, usage_per_user).await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::UsageChanged {
                    actor_id: invocation.actor_id,
                    usage_per_user: settings.usage_per_user,
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Users can now get {} links per reset.", settings.usage_per_user),
            ))
        }
        "webhooks" => {
            let current = service.get(server_id).await?;
            let param = UpdateWebhooksParam {
                reports: resolve_webhook(
                    options::get_str(sub, "reports"),
                    current.reports_webhook_url,
                ),
                logs: resolve_webhook(options::get_str(sub, "logs"), current.logs_webhook_url),
            };

            let settings = service.set_webhook_urls(server_id, param).await?;

            Ok(success_embed("Success", describe_settings(&settings)))
        }
        "view" => {
            let settings = service.get(server_id).await?;

            Ok(success_embed("Settings", describe_settings(&settings)))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand `{}`.", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_webhook_keeps_current() {
        let current = Some("https://discord.com/api/webhooks/1/a".to_string());

        assert_eq!(resolve_webhook(None, current.clone()), current);
    }

    #[test]
    fn none_clears_webhook() {
        let current = Some("https://discord.com/api/webhooks/1/a".to_string());

        assert_eq!(resolve_webhook(Some("None"), current), None);
    }

    #[test]
    fn new_webhook_replaces_current() {
        let updated = resolve_webhook(Some(" https://discord.com/api/webhooks/2/b "), None);

        assert_eq!(
            updated.as_deref(),
            Some("https://discord.com/api/webhooks/2/b")
        );
    }

    #[test]
    fn never_shows_webhook_urls() {
        let settings = ServerSettings {
            server_id: 1,
            usage_per_user: 2,
            reports_webhook_url: Some("https://discord.com/api/webhooks/1/secret".to_string()),
            logs_webhook_url: None,
        };

        let text = describe_settings(&settings);

        assert!(!text.contains("secret"));
        assert!(text.contains("Reports webhook: configured"));
        assert!(text.contains("Logs webhook: not set"));
    }
}
