//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot layer and the data (repository) layer. They are
//! responsible for:
//!
//! - **Business Logic**: Dispense eligibility, quota resolution and admin rules
//! - **Validation**: Rejecting bad input before anything is written
//! - **Orchestration**: Coordinating repository calls and audit delivery
//! - **Domain Models**: Working with `model` types rather than entity models

pub mod audit;
pub mod dispense;
pub mod domain;
pub mod group;
pub mod moderation;
pub mod reset;
pub mod role;
pub mod settings;

#[cfg(test)]
mod test;
