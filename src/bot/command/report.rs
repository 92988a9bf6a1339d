//! `/report`: lets any member flag a link, for example one that is blocked.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed};

use crate::{
    bot::command::{options, success_embed, Invocation},
    error::AppError,
    model::audit::AuditEvent,
    util::domain::strip_scheme,
};

pub fn register() -> CreateCommand {
    CreateCommand::new("report")
        .description("Report a link that doesn't work")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "link", "The link to report")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "reason", "What's wrong with it")
                .required(true),
        )
}

/// Sends the report to the reports webhook.
///
/// Unlike other audit events a failed delivery is reported back, since the report
/// itself is the whole action.
pub async fn run(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let link = options::required(options::get_str(&options, "link"), "link")?;
    let reason = options::required(options::get_str(&options, "reason"), "reason")?;

    invocation
        .notifier
        .notify(
            invocation.server_id,
            AuditEvent::LinkReported {
                reporter_id: invocation.actor_id,
                domain: strip_scheme(link.trim()).to_string(),
                reason: reason.to_string(),
            },
        )
        .await?;

    Ok(success_embed(
        "Report Sent",
        "Thanks, the admins have been notified.",
    ))
}
