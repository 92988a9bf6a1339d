//! Interaction event handler for slash commands and panel buttons.
//!
//! Every interaction is deferred as ephemeral first so slow database or webhook work
//! never hits Discord's three second response window. The final embed is then
//! written with an edit of the deferred response.

use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, Interaction,
};

use crate::{
    bot::{
        command::{
            config, dispense, error_embed, group, links, moderation, panel, permission, report,
            requires_admin, reset, role, Invocation,
        },
        handler::Handler,
    },
    error::AppError,
    service::audit::webhook::WebhookNotifier,
};

const GUILD_ONLY_MESSAGE: &str = "This command can only be used in a server.";
const NOT_ADMIN_MESSAGE: &str = "You don't have permission to use this command.";

/// Routes an interaction to the slash command or panel button handler.
///
/// # Arguments
/// - `handler` - Bot handler holding the database connection
/// - `ctx` - Discord context
/// - `interaction` - The received interaction; other kinds are ignored
pub async fn handle_interaction_create(handler: &Handler, ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) => handle_command(handler, &ctx, &command).await,
        Interaction::Component(component) => handle_component(handler, &ctx, &component).await,
        _ => {}
    }
}

async fn handle_command(handler: &Handler, ctx: &Context, command: &CommandInteraction) {
    let Some(guild_id) = command.guild_id else {
        let response = CreateInteractionResponse::Message(
            CreateInteractionResponseMessage::new()
                .content(GUILD_ONLY_MESSAGE)
                .ephemeral(true),
        );
        if let Err(e) = command.create_response(&ctx.http, response).await {
            tracing::error!("Failed to respond to /{}: {}", command.data.name, e);
        }
        return;
    };

    if let Err(e) = command.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer /{}: {}", command.data.name, e);
        return;
    }

    let embed = match run_command(handler, ctx, command, guild_id.get()).await {
        Ok(embed) => embed,
        Err(e) => {
            tracing::debug!("/{} failed: {}", command.data.name, e);
            error_embed(e.user_message())
        }
    };

    if let Err(e) = command
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await
    {
        tracing::error!("Failed to reply to /{}: {}", command.data.name, e);
    }
}

async fn run_command(
    handler: &Handler,
    ctx: &Context,
    command: &CommandInteraction,
    server_id: u64,
) -> Result<CreateEmbed, AppError> {
    let name = command.data.name.as_str();

    if requires_admin(name) {
        let is_admin = match command.member.as_deref() {
            Some(member) => permission::is_admin(&handler.db, server_id, member).await?,
            None => false,
        };
        if !is_admin {
            return Err(AppError::BadRequest(NOT_ADMIN_MESSAGE.to_string()));
        }
    }

    let notifier = WebhookNotifier::new(&handler.db, ctx.http.clone());
    let invocation = Invocation {
        ctx,
        db: &handler.db,
        notifier: &notifier,
        command,
        links_file: &handler.links_file,
        server_id,
        actor_id: command.user.id.get(),
    };

    match name {
        "dispense" => dispense::run(&invocation).await,
        "panel" => panel::run(&invocation).await,
        "report" => report::run(&invocation).await,
        "groups" => group::run(&invocation).await,
        "roles" => role::run(&invocation).await,
        "links" => links::run(&invocation).await,
        "reset" => reset::run(&invocation).await,
        "ban" => moderation::run_ban(&invocation).await,
        "unban" => moderation::run_unban(&invocation).await,
        "config" => config::run(&invocation).await,
        other => Err(AppError::BadRequest(format!("Unknown command `{}`.", other))),
    }
}

/// Handles a press of a panel button; other components are ignored.
async fn handle_component(handler: &Handler, ctx: &Context, component: &ComponentInteraction) {
    let Some(group_id) = panel::parse_button_id(&component.data.custom_id) else {
        tracing::debug!("Ignoring component {}", component.data.custom_id);
        return;
    };

    let Some(guild_id) = component.guild_id else {
        return;
    };

    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer panel button {}: {}", group_id, e);
        return;
    }

    let held_role_ids = component
        .member
        .as_ref()
        .map(dispense::held_roles)
        .unwrap_or_default();
    let notifier = WebhookNotifier::new(&handler.db, ctx.http.clone());

    let embed = match dispense::dispense_and_reply(
        &handler.db,
        &notifier,
        guild_id.get(),
        component.user.id.get(),
        group_id,
        held_role_ids,
    )
    .await
    {
        Ok(embed) => embed,
        Err(e) => error_embed(e.user_message()),
    };

    if let Err(e) = component
        .edit_response(&ctx.http, EditInteractionResponse::new().embed(embed))
        .await
    {
        tracing::error!("Failed to reply to panel button {}: {}", group_id, e);
    }
}
