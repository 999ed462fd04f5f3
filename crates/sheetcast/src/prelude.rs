//! Convenience re-exports for typical export code
//!
//! ```rust
//! use sheetcast::prelude::*;
//! ```

pub use crate::assemble::{build_sheet, ExportOptions};
pub use crate::cache::{schema_of, RecordSchema};
pub use crate::error::{ExportError, Result, SchemaError};
pub use crate::export::{export_to_writer, SheetEncoder};
pub use crate::field::FieldValue;
pub use crate::locale::Locale;
pub use crate::registry::{StyleDef, StyleId, StyleRegistry};
pub use crate::schema::{ColumnDef, SheetSchema, TitleSpec};

pub use sheetcast_core::{CellValue, Color, NumberFormat, SheetDocument, Style};
