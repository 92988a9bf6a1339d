use crate::{data::user::UserRepository, error::AppError};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod ensure;
mod record_usage;
mod reset_all;
mod reset_user;
mod set_banned;

/// Parses a factory-generated snowflake string.
fn id(value: &str) -> u64 {
    value.parse().unwrap()
}
