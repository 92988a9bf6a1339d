use crate::{
    data::user::UserRepository,
    error::AppError,
    model::dispense::{DenialReason, DispenseOutcome, DispenseParam},
};
use rand::{rngs::StdRng, SeedableRng};
use test_utils::{builder::TestBuilder, factory};


fn id(value: &str) -> u64 {
    value.parse().unwrap()
}

fn param(server_id: &str, user_id: &str, group_id: &str, roles: &[u64]) -> DispenseParam {
    DispenseParam {
        server_id: id(server_id),
        user_id: id(user_id),
        group_id: group_id.to_string(),
        held_role_ids: roles.to_vec(),
    }
}
