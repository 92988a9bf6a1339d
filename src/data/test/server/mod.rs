use crate::{
    data::server::{ServerRepository, DEFAULT_USAGE_PER_USER},
    error::AppError,
    model::server::UpdateWebhooksParam,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod ensure;
mod get_all_ids;
mod set_usage_per_user;
mod set_webhook_urls;
