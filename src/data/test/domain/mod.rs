use crate::{data::domain::DomainRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod count_by_server;
mod create;
mod delete;
mod replace_all_by_server;
mod exists_in_group;

fn id(value: &str) -> u64 {
    value.parse().unwrap()
}
