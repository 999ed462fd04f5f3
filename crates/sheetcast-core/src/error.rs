//! Error types for sheetcast-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetcast-core
#[derive(Debug, Error)]
pub enum Error {
    /// Column width must be positive and finite
    #[error("Invalid column width: {0}")]
    InvalidColumnWidth(f64),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
