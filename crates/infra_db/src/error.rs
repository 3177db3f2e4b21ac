//! Database error types
//!
//! This module defines the error types that can occur during database
//! operations. The rating workload is read-only at runtime, so the taxonomy
//! stays small: connection faults, query faults, and pool exhaustion.

use thiserror::Error;

/// Errors that can occur during database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to establish a database connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Entity not found in database
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Pool exhaustion - no available connections
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Generic SQL error
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Creates a not found error for a specific entity type and identifier
    ///
    /// # Example
    ///
    /// ```rust
    /// use infra_db::DatabaseError;
    ///
    /// let error = DatabaseError::not_found("VehicleRating", "SUV");
    /// assert!(error.to_string().contains("VehicleRating"));
    /// ```
    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        DatabaseError::NotFound(format!("{} with id '{}' not found", entity, id))
    }

    /// Checks if this error indicates a record was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, DatabaseError::NotFound(_))
    }

    /// Checks if this error is a connection-related issue
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            DatabaseError::ConnectionFailed(_) | DatabaseError::PoolExhausted
        )
    }
}

/// Converts SQLx errors to more specific DatabaseError variants
///
/// This impl analyzes the SQLx error and maps it to the appropriate
/// DatabaseError variant; the adapter layer uses it to classify raw
/// `SqlError` values before translating them into port errors.
impl From<&sqlx::Error> for DatabaseError {
    fn from(error: &sqlx::Error) -> Self {
        match error {
            sqlx::Error::RowNotFound => DatabaseError::NotFound("Record not found".to_string()),
            sqlx::Error::PoolTimedOut => DatabaseError::PoolExhausted,
            sqlx::Error::PoolClosed => {
                DatabaseError::ConnectionFailed("connection pool closed".to_string())
            }
            sqlx::Error::Io(e) => DatabaseError::ConnectionFailed(e.to_string()),
            sqlx::Error::Database(db_err) => {
                DatabaseError::QueryFailed(db_err.message().to_string())
            }
            _ => DatabaseError::QueryFailed(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helper() {
        let error = DatabaseError::not_found("RegionRating", "Bayern");
        assert!(error.is_not_found());
        assert!(error.to_string().contains("Bayern"));
    }

    #[test]
    fn test_connection_classification() {
        assert!(DatabaseError::PoolExhausted.is_connection_error());
        assert!(DatabaseError::ConnectionFailed("refused".to_string()).is_connection_error());
        assert!(!DatabaseError::QueryFailed("bad relation".to_string()).is_connection_error());
    }

    #[test]
    fn test_sqlx_classification() {
        let not_found = DatabaseError::from(&sqlx::Error::RowNotFound);
        assert!(not_found.is_not_found());

        let exhausted = DatabaseError::from(&sqlx::Error::PoolTimedOut);
        assert!(exhausted.is_connection_error());
    }
}
