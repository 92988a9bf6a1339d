//! `/panel`: posts an embed with one dispense button per group.

use serenity::all::{
    ButtonStyle as DiscordButtonStyle, CreateActionRow, CreateButton, CreateCommand, CreateEmbed,
    CreateMessage, ReactionType,
};

use crate::{
    bot::command::{success_embed, Invocation},
    error::AppError,
    model::group::{ButtonStyle, DomainGroup, DISPENSE_BUTTON_PREFIX},
    service::{audit::builder::DEFAULT_COLOR, group::DomainGroupService},
};

/// Discord allows at most five buttons per action row.
const BUTTONS_PER_ROW: usize = 5;

pub fn register() -> CreateCommand {
    CreateCommand::new("panel")
        .description("Post the dispense panel in this channel")
        .dm_permission(false)
}

pub async fn run(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let groups = DomainGroupService::new(invocation.db)
        .list(invocation.server_id)
        .await?;

    if groups.is_empty() {
        return Err(AppError::BadRequest(
            "Create a group with `/groups create` before posting the panel.".to_string(),
        ));
    }

    let message = CreateMessage::new()
        .embed(
            CreateEmbed::new()
                .title("Link Dispenser")
                .description("Press a button below to get a link from that group.")
                .color(DEFAULT_COLOR),
        )
        .components(build_panel_rows(&groups));

    invocation
        .command
        .channel_id
        .send_message(&invocation.ctx.http, message)
        .await?;

    Ok(success_embed(
        "Success",
        format!("Posted a panel with {} groups.", groups.len()),
    ))
}

/// Extracts the group name from a panel button's custom id.
pub fn parse_button_id(custom_id: &str) -> Option<&str> {
    custom_id
        .strip_prefix(DISPENSE_BUTTON_PREFIX)
        .filter(|group_id| !group_id.is_empty())
}

/// Lays the groups' buttons out in rows of five.
pub fn build_panel_rows(groups: &[DomainGroup]) -> Vec<CreateActionRow> {
    groups
        .chunks(BUTTONS_PER_ROW)
        .map(|chunk| CreateActionRow::Buttons(chunk.iter().map(build_button).collect()))
        .collect()
}

fn build_button(group: &DomainGroup) -> CreateButton {
    let mut button = CreateButton::new(format!("{}{}", DISPENSE_BUTTON_PREFIX, group.group_id))
        .label(&group.button.label)
        .style(discord_style(group.button.style));

    if let Some(emoji) = &group.button.emoji {
        match ReactionType::try_from(emoji.as_str()) {
            Ok(reaction) => button = button.emoji(reaction),
            Err(_) => tracing::warn!(
                "Ignoring invalid emoji {} on group {}",
                emoji,
                group.group_id
            ),
        }
    }

    button
}

fn discord_style(style: ButtonStyle) -> DiscordButtonStyle {
    match style {
        ButtonStyle::Primary => DiscordButtonStyle::Primary,
        ButtonStyle::Secondary => DiscordButtonStyle::Secondary,
        ButtonStyle::Success => DiscordButtonStyle::Success,
        ButtonStyle::Danger => DiscordButtonStyle::Danger,
    }
}
