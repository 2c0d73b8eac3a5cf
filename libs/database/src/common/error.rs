/// Errors raised by the connector and the repository helpers
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Error reported by SeaORM / the driver
    #[cfg(feature = "sql")]
    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),

    /// A write was handed a model without a primary key value
    #[error("Value cannot be null. (Parameter '{0}')")]
    NullArgument(String),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
