//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after authentication. Used to log the connection
//! and register the bot's global slash commands.

use serenity::all::{Command, Context, Ready};

use crate::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// Registering global commands overwrites the previous set, so renamed or removed
/// commands disappear on the next start.
///
/// # Arguments
/// - `ctx` - Discord context used for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    match Command::set_global_commands(&ctx.http, command::all()).await {
        Ok(commands) => tracing::info!("Registered {} global commands", commands.len()),
        Err(e) => tracing::error!("Failed to register global commands: {}", e),
    }
}
