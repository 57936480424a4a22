//! Typed error enum for the storage layer.

use thiserror::Error;

/// Storage-layer error. Messages carry the driver's text unchanged.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Could not open a connection with the configured connection string.
    #[error("{0}")]
    Connection(#[source] sqlx::Error),

    /// SQL execution or row decoding failed.
    #[error("{0}")]
    Database(#[source] sqlx::Error),

    /// Schema setup failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// Failure inside a non-PostgreSQL store.
    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err)
    }
}
