//! `/reset`: clear usage for one user or the whole server.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed};

use crate::{
    bot::command::{options, success_embed, Invocation},
    error::AppError,
    model::audit::AuditEvent,
    service::{audit::notify_or_warn, reset::ResetService},
};

fn dupes_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Boolean,
        "dupes",
        "Also forget which links were handed out",
    )
}

pub fn register() -> CreateCommand {
    CreateCommand::new("reset")
        .description("Reset link usage")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "user", "Reset one user")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::User, "user", "User to reset")
                        .required(true),
                )
                .add_sub_option(dupes_option()),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "all", "Reset every user")
                .add_sub_option(dupes_option()),
        )
}

pub async fn run(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let (subcommand, sub) = options::required(options::subcommand(&options), "subcommand")?;

    let service = ResetService::new(invocation.db);
    let server_id = invocation.server_id;
    let actor_id = invocation.actor_id;
    let reset_dupes = options::get_bool(sub, "dupes").unwrap_or(false);

    match subcommand {
        "user" => {
            let user_id = options::required(options::get_user_id(sub, "user"), "user")?;

            service.reset_user(server_id, user_id, reset_dupes).await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::UserReset {
                    actor_id,
                    user_id,
                    reset_dupes,
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Reset usage for <@{}>.", user_id),
            ))
        }
        "all" => {
            let count = service.reset_all(server_id, reset_dupes).await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::AllUsersReset {
                    actor_id: Some(actor_id),
                    reset_dupes,
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Reset usage for {} users.", count),
            ))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand `{}`.", other))),
    }
}
