//! Dispenser Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the dispenser
//! bot. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and factories for seeding servers, users, roles, groups and domains.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn dispenses_from_group() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_dispenser_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let server = factory::create_server(db).await?;
//!     let group = factory::create_group(db, &server.server_id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
