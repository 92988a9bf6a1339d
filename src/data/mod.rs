//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the bot. Repositories use SeaORM entity models internally and return domain
//! models to keep the data layer separate from business logic. All database queries,
//! inserts, updates, and deletes are performed through these repositories.

pub mod domain;
pub mod group;
pub mod role;
pub mod server;
pub mod user;

#[cfg(test)]
mod test;
