//! `/groups`: create, edit, delete and list domain groups.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed};

use crate::{
    bot::command::{options, success_embed, Invocation},
    error::AppError,
    model::{
        audit::AuditEvent,
        group::{
            ButtonStyle, CreateGroupParam, GroupButton, UpdateGroupParam, MAX_BUTTON_LABEL_LEN,
            MAX_GROUP_ID_LEN,
        },
    },
    service::{audit::notify_or_warn, group::DomainGroupService},
};

fn style_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "style", "Button style")
        .add_string_choice("Primary", "Primary")
        .add_string_choice("Secondary", "Secondary")
        .add_string_choice("Success", "Success")
        .add_string_choice("Danger", "Danger")
}

fn name_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "name", "Group name")
        .max_length(MAX_GROUP_ID_LEN as u16)
        .required(true)
}

fn label_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "label", "Panel button label")
        .max_length(MAX_BUTTON_LABEL_LEN as u16)
}

pub fn register() -> CreateCommand {
    CreateCommand::new("groups")
        .description("Manage link groups")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "create", "Create a group")
                .add_sub_option(name_option())
                .add_sub_option(label_option().required(true))
                .add_sub_option(style_option())
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::String,
                    "emoji",
                    "Panel button emoji",
                ))
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::Role,
                    "role",
                    "Role required to dispense from this group",
                )),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "edit", "Edit a group")
                .add_sub_option(name_option())
                .add_sub_option(label_option())
                .add_sub_option(style_option())
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::String,
                    "emoji",
                    "Panel button emoji",
                ))
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::Role,
                    "role",
                    "Role required to dispense from this group",
                )),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "delete",
                "Delete a group and all of its links",
            )
            .add_sub_option(name_option()),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List all groups",
        ))
}

pub async fn run(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let (subcommand, sub) = options::required(options::subcommand(&options), "subcommand")?;

    let service = DomainGroupService::new(invocation.db);
    let server_id = invocation.server_id;
    let actor_id = invocation.actor_id;

    match subcommand {
        "create" => {
            let style = options::get_str(sub, "style")
                .map(str::parse::<ButtonStyle>)
                .transpose()?
                .unwrap_or_default();
            let param = CreateGroupParam {
                group_id: options::required(options::get_str(sub, "name"), "name")?.to_string(),
                button: GroupButton {
                    label: options::required(options::get_str(sub, "label"), "label")?
                        .to_string(),
                    style,
                    emoji: options::get_str(sub, "emoji").map(str::to_string),
                },
                required_role_id: options::get_role_id(sub, "role"),
            };

            let group = service.create(server_id, actor_id, param).await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::GroupCreated {
                    actor_id,
                    group_id: group.group_id.clone(),
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Created group `{}`.", group.group_id),
            ))
        }
        "edit" => {
            let group_id = options::required(options::get_str(sub, "name"), "name")?;
            let param = UpdateGroupParam {
                button_label: options::get_str(sub, "label").map(str::to_string),
                button_style: options::get_str(sub, "style")
                    .map(str::parse::<ButtonStyle>)
                    .transpose()?,
                button_emoji: options::get_str(sub, "emoji").map(str::to_string),
                required_role_id: options::get_role_id(sub, "role"),
            };

            let group = service.edit(server_id, actor_id, group_id, param).await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::GroupEdited {
                    actor_id,
                    group_id: group.group_id.clone(),
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Updated group `{}`.", group.group_id),
            ))
        }
        "delete" => {
            let group_id = options::required(options::get_str(sub, "name"), "name")?;

            service.delete(server_id, group_id).await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::GroupDeleted {
                    actor_id,
                    group_id: group_id.to_string(),
                },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Deleted group `{}` and its links.", group_id),
            ))
        }
        "list" => {
            let groups = service.list(server_id).await?;

            let description = if groups.is_empty() {
                "No groups yet.".to_string()
            } else {
                groups
                    .iter()
                    .map(|group| {
                        let role = group
                            .required_role_id
                            .map(|id| format!(" | requires <@&{}>", id))
                            .unwrap_or_default();
                        format!(
                            "`{}` | {} links | {} ({}){}",
                            group.group_id,
                            group.domains.len(),
                            group.button.label,
                            group.button.style,
                            role
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            };

            Ok(success_embed("Groups", description))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand `{}`.", other))),
    }
}
