//! Slash command definitions and implementations.
//!
//! Each submodule exposes `register()`, returning the command definition, and
//! `run()`, which performs the command and returns the embed to reply with. Errors are
//! turned into a reply by the interaction handler using [`AppError::user_message`].

pub mod config;
pub mod dispense;
pub mod group;
pub mod links;
pub mod moderation;
pub mod options;
pub mod panel;
pub mod permission;
pub mod report;
pub mod reset;
pub mod role;

use std::path::Path;

use sea_orm::DatabaseConnection;
use serenity::all::{CommandInteraction, Context, CreateCommand, CreateEmbed};

use crate::service::audit::{
    builder::{ALERT_COLOR, DEFAULT_COLOR},
    AuditNotifier,
};

/// Everything a command needs to run.
pub struct Invocation<'a> {
    pub ctx: &'a Context,
    pub db: &'a DatabaseConnection,
    pub notifier: &'a dyn AuditNotifier,
    pub command: &'a CommandInteraction,
    pub links_file: &'a Path,
    /// Guild the command was used in.
    pub server_id: u64,
    /// Discord user who invoked the command.
    pub actor_id: u64,
}

/// Gets every command definition for global registration.
pub fn all() -> Vec<CreateCommand> {
    vec![
        dispense::register(),
        panel::register(),
        report::register(),
        group::register(),
        role::register(),
        links::register(),
        reset::register(),
        moderation::register_ban(),
        moderation::register_unban(),
        config::register(),
    ]
}

/// Whether a command is limited to administrators and admin roles.
pub fn requires_admin(name: &str) -> bool {
    !matches!(name, "dispense" | "report")
}

pub fn success_embed(title: &str, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(DEFAULT_COLOR)
}

pub fn error_embed(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title("Error")
        .description(description)
        .color(ALERT_COLOR)
}
