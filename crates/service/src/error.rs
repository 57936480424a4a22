//! Typed error enum for the service layer.

use sensor_gateway_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed; the message is the store's own.
    #[error("{0}")]
    Storage(#[from] StorageError),

    /// Caller provided missing or malformed input.
    #[error("{0}")]
    InvalidInput(String),

    /// No readings exist for the requested sensor.
    #[error("{0}")]
    NotFound(String),
}

impl ServiceError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
