//! Application state management.
//!
//! Shared state handed to the route builders and the readiness probe:
//! - Configuration
//! - Database connection pool

use database::sql::DatabaseConnection;

/// Shared application state.
///
/// Cloning is cheap: the connection pool is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Database connection pool
    pub db: DatabaseConnection,
}
