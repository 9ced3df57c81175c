//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Profile file missing or unreadable
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    /// Profile or config payload failed to (de)serialize
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl CoreError {
    /// Whether the error is expected behavior (user-fixable input, missing
    /// file, etc.), used for log classification.
    ///
    /// Log at `warn` when this returns `true` and at `error` otherwise.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::ProfileNotFound(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
