//! `/roles`: configure special limits and admin roles.

use serenity::all::{CommandOptionType, CreateCommand, CreateCommandOption, CreateEmbed};

use crate::{
    bot::command::{options, success_embed, Invocation},
    error::AppError,
    model::{
        audit::AuditEvent,
        role::{CreateRoleParam, Role, UpdateRoleParam},
    },
    service::{audit::notify_or_warn, role::RoleService},
    util::parse::MAX_STORED_COUNT,
};

fn role_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Role, "role", "The Discord role").required(true)
}

fn limit_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Integer,
        "limit",
        "Links per reset period for holders of this role",
    )
    .min_int_value(0)
    .max_int_value(MAX_STORED_COUNT as u64)
}

fn admin_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Boolean,
        "admin",
        "Whether holders can use admin commands",
    )
}

pub fn register() -> CreateCommand {
    CreateCommand::new("roles")
        .description("Manage configured roles")
        .dm_permission(false)
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "create", "Configure a role")
                .add_sub_option(role_option())
                .add_sub_option(limit_option())
                .add_sub_option(admin_option()),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "edit", "Edit a configured role")
                .add_sub_option(role_option())
                .add_sub_option(limit_option())
                .add_sub_option(admin_option()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "remove",
                "Stop configuring a role",
            )
            .add_sub_option(role_option()),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "List configured roles",
        ))
}

fn describe_role(role: &Role) -> String {
    let limit = role
        .special_limit
        .map(|limit| limit.to_string())
        .unwrap_or_else(|| "default".to_string());
    format!(
        "<@&{}> | limit: {} | admin: {}",
        role.role_id,
        limit,
        if role.admin_role { "yes" } else { "no" }
    )
}

pub async fn run(invocation: &Invocation<'_>) -> Result<CreateEmbed, AppError> {
    let options = invocation.command.data.options();
    let (subcommand, sub) = options::required(options::subcommand(&options), "subcommand")?;

    let service = RoleService::new(invocation.db);
    let server_id = invocation.server_id;
    let actor_id = invocation.actor_id;

    match subcommand {
        "create" => {
            let role_id = options::required(options::get_role_id(sub, "role"), "role")?;
            let special_limit = options::get_int(sub, "limit")
                .map(|limit| options::to_count(limit, "limit"))
                .transpose()?;
            let admin_role = options::get_bool(sub, "admin").unwrap_or(false);

            let role = service
                .create(
                    server_id,
                    CreateRoleParam {
                        role_id,
                        special_limit,
                        admin_role,
                    },
                )
                .await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::RoleCreated {
                    actor_id,
                    role_id: role.role_id,
                    special_limit: role.special_limit,
                    admin_role: role.admin_role,
                },
            )
            .await;

            Ok(success_embed("Success", describe_role(&role)))
        }
        "edit" => {
            let role_id = options::required(options::get_role_id(sub, "role"), "role")?;
            let param = UpdateRoleParam {
                special_limit: options::get_int(sub, "limit")
                    .map(|limit| options::to_count(limit, "limit"))
                    .transpose()?,
                admin_role: options::get_bool(sub, "admin"),
            };

            let role = service.edit(server_id, role_id, param).await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::RoleEdited {
                    actor_id,
                    role_id: role.role_id,
                },
            )
            .await;

            Ok(success_embed("Success", describe_role(&role)))
        }
        "remove" => {
            let role_id = options::required(options::get_role_id(sub, "role"), "role")?;

            service.remove(server_id, role_id).await?;

            notify_or_warn(
                invocation.notifier,
                server_id,
                AuditEvent::RoleRemoved { actor_id, role_id },
            )
            .await;

            Ok(success_embed(
                "Success",
                format!("Role <@&{}> is no longer configured.", role_id),
            ))
        }
        "list" => {
            let roles = service.list(server_id).await?;

            let description = if roles.is_empty() {
                "No roles configured.".to_string()
            } else {
                roles.iter().map(describe_role).collect::<Vec<_>>().join("\n")
            };

            Ok(success_embed("Roles", description))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand `{}`.", other))),
    }
}
