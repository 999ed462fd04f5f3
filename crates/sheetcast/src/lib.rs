//! # sheetcast
//!
//! Schema-driven export of typed record lists to styled spreadsheet documents.
//!
//! Instead of writing cell-by-cell export code per report type, a record type
//! declares its columns once — header text per language, width, styles,
//! number format, default text — and the engine turns any `&[T]` into a
//! finished [`SheetDocument`]: optional title and record-count rows, a header
//! row, one body row per record. The physical file format stays external
//! behind the [`SheetEncoder`] seam.
//!
//! ## Example
//!
//! ```rust
//! use sheetcast::prelude::*;
//!
//! struct Employee {
//!     name: String,
//!     salary: f64,
//! }
//!
//! let schema: SheetSchema<Employee> = SheetSchema::builder()
//!     .column(
//!         ColumnDef::new("name", |e: &Employee| (&e.name).into())
//!             .header("이름")
//!             .header_alt("Name"),
//!     )
//!     .column(
//!         ColumnDef::new("salary", |e: &Employee| e.salary.into())
//!             .header("연봉")
//!             .header_alt("Salary")
//!             .format("#,##0.00"),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let records = vec![Employee { name: "Ann".into(), salary: 5000.5 }];
//! let doc = build_sheet(
//!     &records,
//!     &schema,
//!     &StyleRegistry::new(),
//!     &ExportOptions::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(doc.value_at(0, 0), CellValue::text("이름"));
//! assert_eq!(doc.value_at(1, 1), CellValue::Number(5000.5));
//! ```

pub mod assemble;
pub mod cache;
pub mod error;
pub mod export;
pub mod field;
pub mod locale;
pub mod prelude;
pub mod registry;
pub mod schema;

// Re-exports for convenience
pub use assemble::{build_sheet, ExportOptions};
pub use cache::{schema_of, RecordSchema};
pub use error::{ExportError, Result, SchemaError};
pub use export::{export_to_writer, SheetEncoder};
pub use field::{coerce, FieldValue};
pub use locale::Locale;
pub use registry::{StyleDef, StyleId, StyleRegistry};
pub use schema::{ColumnDef, ColumnSpec, SheetSchema, SheetSchemaBuilder, TitleSpec};

// Re-export the document model
pub use sheetcast_core::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Cell, CellValue, Color, FillStyle,
    FontStyle, HorizontalAlignment, NumberFormat, Row, SheetDocument, Style, StylePool,
    VerticalAlignment,
};
