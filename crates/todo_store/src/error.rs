//! Todo store error types.

use thiserror::Error;

/// Errors that can occur during todo store operations.
///
/// A lookup miss is not an error: `update` and `delete` report it through
/// their return value instead.
#[derive(Debug, Error)]
pub enum TodoStoreError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored id could not be parsed.
    #[error("Invalid todo item id: {0}")]
    InvalidId(String),

    /// A stored priority is outside the known levels.
    #[error("Invalid priority value: {0}")]
    InvalidPriority(i64),

    /// A stored timestamp could not be parsed.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Other error.
    #[error("{0}")]
    Other(String),
}

/// Result type for todo store operations.
pub type TodoStoreResult<T> = Result<T, TodoStoreError>;
