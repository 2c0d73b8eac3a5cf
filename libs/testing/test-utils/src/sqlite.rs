//! SQLite test infrastructure
//!
//! Provides a `TestDatabase` helper backed by an in-memory SQLite database
//! with the workspace migrations applied.

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

/// In-memory test database
///
/// Every instance is its own database and disappears when the last clone of
/// the connection is dropped, so tests never see each other's rows.
pub struct TestDatabase {
    pub connection: DatabaseConnection,
}

impl TestDatabase {
    /// Create a new test database with migrations applied
    ///
    /// # Example
    ///
    /// ```no_run
    /// use test_utils::TestDatabase;
    ///
    /// # async fn example() {
    /// let db = TestDatabase::new().await;
    /// // Hand db.connection() to the service under test
    /// # }
    /// ```
    pub async fn new() -> Self {
        let db = Self::empty().await;

        Migrator::up(&db.connection, None)
            .await
            .expect("Failed to run migrations on test database");

        tracing::debug!("Test database ready (SQLite, in-memory)");
        db
    }

    /// Create a test database without any tables
    pub async fn empty() -> Self {
        // A second pooled connection would open a different in-memory database.
        let mut options = ConnectOptions::new("sqlite::memory:");
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        let connection = Database::connect(options)
            .await
            .expect("Failed to connect to test database");

        Self { connection }
    }

    /// Get a handle to the database connection
    pub fn connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Number of rows currently stored in `table`
    pub async fn count_rows(&self, table: &str) -> i64 {
        let row = self
            .connection
            .query_one_raw(Statement::from_string(
                self.connection.get_database_backend(),
                format!("SELECT COUNT(*) AS n FROM {table}"),
            ))
            .await
            .expect("Failed to count rows")
            .expect("COUNT(*) returned no row");

        row.try_get("", "n").expect("COUNT(*) is not an integer")
    }
}
