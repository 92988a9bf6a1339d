use crate::{
    data::role::RoleRepository,
    error::AppError,
    model::role::{CreateRoleParam, UpdateRoleParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_admin_role_ids;
mod get_special_limits;
mod update;

fn id(value: &str) -> u64 {
    value.parse().unwrap()
}
