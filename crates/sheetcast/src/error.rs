//! Error types for the export engine

use thiserror::Error;

use crate::registry::StyleId;

/// Result type alias using [`ExportError`]
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors that can occur while declaring a schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A column was declared with an empty field name
    #[error("column {0} has an empty field name")]
    EmptyFieldName(usize),

    /// Two columns were declared for the same field
    #[error("duplicate column for field '{0}'")]
    DuplicateField(String),

    /// A column width must be positive and finite
    #[error("column '{field}' has invalid width {width}")]
    InvalidWidth {
        /// Offending field name
        field: String,
        /// Declared width
        width: f64,
    },
}

/// Errors that can occur during an export
///
/// There is no partial-success mode: any error aborts the export and the
/// in-progress document is dropped, never flushed.
#[derive(Debug, Error)]
pub enum ExportError {
    /// A style id not present in the registry was referenced
    #[error("unknown style id '{0}'")]
    UnknownStyle(StyleId),

    /// The declared schema is invalid (fails before any document work)
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Document construction failed
    #[error("document error: {0}")]
    Document(#[from] sheetcast_core::Error),

    /// Encoding or writing to the output transport failed
    #[error("transport failure: {0}")]
    Transport(#[from] std::io::Error),
}
