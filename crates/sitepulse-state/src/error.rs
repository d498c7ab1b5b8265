//! Error types for the SitePulse status store.

use thiserror::Error;

/// Result type alias for status store operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur while reading or persisting the status store.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("failed to read status file: {0}")]
    Read(String),

    #[error("failed to parse status file: {0}")]
    Parse(String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("failed to write status file: {0}")]
    Write(String),
}
