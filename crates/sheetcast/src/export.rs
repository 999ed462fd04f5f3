//! Encoder seam and transport-safe export
//!
//! The physical file format lives behind [`SheetEncoder`]; this module only
//! guarantees the all-or-nothing transport contract: the document is encoded
//! into an owned buffer first, and the output writer sees either the complete
//! encoding or nothing at all.

use std::io::{self, Write};

use log::debug;
use sheetcast_core::SheetDocument;

use crate::assemble::{build_sheet, ExportOptions};
use crate::error::Result;
use crate::registry::StyleRegistry;
use crate::schema::SheetSchema;

/// Encodes a finished document into a spreadsheet byte format
///
/// Implementations are external collaborators (an XLSX writer, a test stub);
/// the engine never assumes anything about the byte layout.
pub trait SheetEncoder {
    /// Encode the document into the given output
    fn encode(&self, doc: &SheetDocument, out: &mut dyn Write) -> io::Result<()>;
}

/// Build, encode, and write a sheet in one call
///
/// Assembly or encoding failures leave the writer untouched; write and flush
/// failures surface as [`ExportError::Transport`](crate::ExportError::Transport).
/// Nothing is ever partially flushed.
pub fn export_to_writer<T, E, W>(
    records: &[T],
    schema: &SheetSchema<T>,
    registry: &StyleRegistry,
    options: &ExportOptions,
    encoder: &E,
    writer: &mut W,
) -> Result<()>
where
    E: SheetEncoder + ?Sized,
    W: Write,
{
    let doc = build_sheet(records, schema, registry, options)?;

    let mut buf = Vec::new();
    encoder.encode(&doc, &mut buf)?;
    debug!("encoded sheet '{}' to {} byte(s)", doc.name(), buf.len());

    writer.write_all(&buf)?;
    writer.flush()?;
    Ok(())
}
