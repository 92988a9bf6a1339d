//! Cron jobs that run alongside the bot.
//!
//! - `weekly_reset` - Scheduled usage reset for every server

pub mod weekly_reset;
