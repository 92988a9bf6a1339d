//! Domain models and operation parameters.
//!
//! Repositories convert SeaORM entity models into these types at the data boundary,
//! parsing stored snowflake strings into `u64` and stored counters into `u32`, so
//! services and the bot layer never touch entity types directly.

pub mod audit;
pub mod dispense;
pub mod domain;
pub mod group;
pub mod role;
pub mod server;
pub mod user;
