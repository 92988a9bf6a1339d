use crate::{
    data::group::DomainGroupRepository,
    error::AppError,
    model::group::{ButtonStyle, CreateGroupParam, GroupButton, UpdateGroupParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod count_by_server;
mod create;
mod delete;
mod find;
mod get_by_server;
mod update;

fn id(value: &str) -> u64 {
    value.parse().unwrap()
}

fn create_param(group_id: &str) -> CreateGroupParam {
    CreateGroupParam {
        group_id: group_id.to_string(),
        button: GroupButton {
            label: format!("Get {}", group_id),
            style: ButtonStyle::Success,
            emoji: None,
        },
        required_role_id: None,
    }
}
