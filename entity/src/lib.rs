//! SeaORM entities for the dispenser schema.
//!
//! Discord snowflakes are stored as strings and parsed back into `u64` at the
//! repository boundary.

pub mod prelude;

pub mod domain;
pub mod domain_group;
pub mod server;
pub mod server_role;
pub mod server_user;
pub mod used_domain;
