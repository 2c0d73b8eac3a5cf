//! Relational database plumbing shared by the domain crates.
//!
//! - [`sql`]: connection pool setup, startup retry, migrations, health probe
//! - [`repository`]: [`BaseRepository`], a stateless CRUD helper over any
//!   SeaORM entity keyed by a `Uuid`
//! - [`common`]: error type and retry/backoff helpers
//!
//! # Example
//!
//! ```ignore
//! use database::sql::{self, DatabaseConfig};
//! use core_config::FromEnv;
//! use migration::Migrator;
//!
//! let db = sql::connect_from_config_with_retry(DatabaseConfig::from_env()?, None).await?;
//! sql::run_migrations::<Migrator>(&db, "todo_api").await?;
//! ```
//!
//! # Features
//!
//! - `sql` (default) - SeaORM connector, repository, migrations
//! - `config` (default) - `core_config::FromEnv` for [`sql::DatabaseConfig`]

pub mod common;

#[cfg(feature = "sql")]
pub mod repository;

#[cfg(feature = "sql")]
pub mod sql;

pub use common::{DatabaseError, DatabaseResult};

#[cfg(feature = "sql")]
pub use repository::{BaseRepository, UuidEntity};
