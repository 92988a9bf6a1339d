//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories leave foreign keys to the caller, so create the
//! parent server (and group, for domains) first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let server = factory::create_server(&db).await?;
//! let user = factory::create_user(&db, &server.server_id).await?;
//! let (group, domains) =
//!     factory::helpers::create_group_with_domains(&db, &server.server_id, &["a.com", "b.com"])
//!         .await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db, &server.server_id)
//!     .usage_count(2)
//!     .used_domains(["a.com"])
//!     .banned(true)
//!     .build()
//!     .await?;
//! ```

pub mod domain;
pub mod group;
pub mod helpers;
pub mod role;
pub mod server;
pub mod user;

pub use domain::create_domain;
pub use group::create_group;
pub use role::create_role;
pub use server::create_server;
pub use user::create_user;
