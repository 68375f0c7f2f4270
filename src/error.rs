//! Error types for notifier
//!
//! Sending a notification never fails; these errors come from loading
//! configuration and building the roster.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for notifier operations
pub type NotifierResult<T> = Result<T, NotifierError>;

/// Main error type for notifier operations
#[derive(Error, Debug)]
pub enum NotifierError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Roster entry failed validation
    #[error("invalid recipient #{index}: {reason}")]
    InvalidRecipient { index: usize, reason: String },
}
