//! # sheetcast-core
//!
//! In-memory document model for the sheetcast export engine.
//!
//! This crate provides the types an export session produces and an external
//! spreadsheet encoder consumes:
//! - [`CellValue`] - Spreadsheet-native cell payloads (text, numbers, dates, booleans)
//! - [`Style`] - Cell formatting (fonts, fills, borders, number formats)
//! - [`StylePool`] - Per-document style deduplication
//! - [`SheetDocument`] - A single append-only sheet, rows emitted in order
//!
//! The model is deliberately write-only and single-sheet: rows are appended,
//! never read back or edited, and each document owns its own style pool so
//! resolved styles never leak across export sessions.
//!
//! ## Example
//!
//! ```rust
//! use sheetcast_core::{CellValue, SheetDocument, Style};
//!
//! let mut doc = SheetDocument::new("Report");
//! let bold = doc.intern_style(Style::new().bold(true));
//! doc.append_row(vec![
//!     (CellValue::text("Revenue"), bold),
//!     (CellValue::Number(5000.5), 0),
//! ]);
//! assert_eq!(doc.row_count(), 1);
//! ```

pub mod error;
pub mod sheet;
pub mod style;
pub mod value;

// Re-exports for convenience
pub use error::{Error, Result};
pub use sheet::{Cell, Row, SheetDocument};
pub use value::CellValue;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, Style, StylePool, VerticalAlignment,
};

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Default column width in characters
pub const DEFAULT_COLUMN_WIDTH: f64 = 8.43;
