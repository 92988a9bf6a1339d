//! `/dispense` and the shared dispense reply used by panel buttons.

use sea_orm::DatabaseConnection;
use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed, Member};

use crate::{
    bot::command::{error_embed, options, success_embed, Invocation},
    error::AppError,
    model::{
        audit::AuditEvent,
        dispense::{DispenseOutcome, DispenseParam},
    },
    service::{
        audit::{notify_or_warn, AuditNotifier},
        dispense::DispenseService,
    },
};

pub fn register() -> CreateCommand {
    CreateCommand::new("dispense")
        .description("Get a link from a group")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "group", "Group to dispense from")
                .required(true),
        )
}

pub async fn run(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let group_id = options::required(options::get_str(&options, "group"), "group")?;

    let held_role_ids = invocation
        .command
        .member
        .as_deref()
        .map(held_roles)
        .unwrap_or_default();

    dispense_and_reply(
        invocation.db,
        invocation.notifier,
        invocation.server_id,
        invocation.actor_id,
        group_id,
        held_role_ids,
    )
    .await
}

/// Runs a dispense and builds the reply; successful dispenses are sent to the logs webhook.
pub async fn dispense_and_reply(
    db: &DatabaseConnection,
    notifier: &dyn AuditNotifier,
    server_id: u64,
    user_id: u64,
    group_id: &str,
    held_role_ids: Vec<u64>,
) -> Result<CreateEmbed, AppError> {
    let outcome = DispenseService::new(db)
        .dispense(DispenseParam {
            server_id,
            user_id,
            group_id: group_id.to_string(),
            held_role_ids,
        })
        .await?;

    let DispenseOutcome::Success(dispensed) = &outcome else {
        tracing::debug!(
            "Dispense for {} in {} refused: {}",
            user_id,
            server_id,
            outcome.system_message()
        );
        return Ok(error_embed(outcome.user_message()));
    };

    notify_or_warn(
        notifier,
        server_id,
        AuditEvent::Dispensed {
            user_id,
            group_id: dispensed.group_id.clone(),
            domain: dispensed.domain_clean.clone(),
            remaining_uses: dispensed.remaining_uses,
        },
    )
    .await;

    Ok(success_embed(
        "Here's your link",
        format!("{}\n\n{}", dispensed.domain, outcome.user_message()),
    ))
}

pub fn held_roles(member: &Member) -> Vec<u64> {
    member.roles.iter().map(|role| role.get()).collect()
}
