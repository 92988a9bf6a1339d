//! `/ban` and `/unban`: block or restore a user's access to dispensing.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed};

use crate::{
    bot::command::{options, success_embed, Invocation},
    error::AppError,
    model::audit::AuditEvent,
    service::{audit::notify_or_warn, moderation::ModerationService},
};

fn user_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "user", "The user").required(true)
}

pub fn register_ban() -> CreateCommand {
    CreateCommand::new("ban")
        .description("Stop a user from getting links")
        .dm_permission(false)
        .add_option(user_option())
}

pub fn register_unban() -> CreateCommand {
    CreateCommand::new("unban")
        .description("Let a banned user get links again")
        .dm_permission(false)
        .add_option(user_option())
}

pub async fn run_ban(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let user_id = options::required(options::get_user_id(&options, "user"), "user")?;

    ModerationService::new(invocation.db)
        .ban(invocation.server_id, user_id)
        .await?;

    notify_or_warn(
        invocation.notifier,
        invocation.server_id,
        AuditEvent::UserBanned {
            actor_id: invocation.actor_id,
            user_id,
        },
    )
    .await;

    Ok(success_embed("Success", format!("Banned <@{}>.", user_id)))
}

pub async fn run_unban(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let user_id = options::required(options::get_user_id(&options, "user"), "user")?;

    ModerationService::new(invocation.db)
        .unban(invocation.server_id, user_id)
        .await?;

    notify_or_warn(
        invocation.notifier,
        invocation.server_id,
        AuditEvent::UserUnbanned {
            actor_id: invocation.actor_id,
            user_id,
        },
    )
    .await;

    Ok(success_embed("Success", format!("Unbanned <@{}>.", user_id)))
}
