//! Sheet document type

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::style::{Style, StylePool};
use crate::value::CellValue;
use crate::{DEFAULT_COLUMN_WIDTH, MAX_SHEET_NAME_LEN};

/// A single cell: value plus a style reference into the document's pool
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// Index into the style pool (0 = default style)
    pub style_index: u32,
}

impl Cell {
    /// Create a new cell with a value and default style
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style_index: 0,
        }
    }

    /// Create a new cell with a value and style
    pub fn with_style(value: CellValue, style_index: u32) -> Self {
        Self { value, style_index }
    }
}

impl From<(CellValue, u32)> for Cell {
    fn from((value, style_index): (CellValue, u32)) -> Self {
        Cell { value, style_index }
    }
}

/// One emitted row, cells in column order
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Cells in this row
    pub cells: Vec<Cell>,
}

impl Row {
    /// Get a cell by column index
    pub fn cell(&self, col: usize) -> Option<&Cell> {
        self.cells.get(col)
    }

    /// Number of cells in the row
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// A single-sheet, append-only spreadsheet document
///
/// This is what an export session produces and hands to an encoder. Rows are
/// emitted top to bottom and never edited afterwards; the document owns the
/// [`StylePool`] its cells reference, so it is self-contained.
#[derive(Debug)]
pub struct SheetDocument {
    /// Sheet name (sanitized)
    name: String,
    /// Emitted rows, in order
    rows: Vec<Row>,
    /// Custom column widths (column index → width in characters)
    column_widths: BTreeMap<u16, f64>,
    /// Style pool owned by this document
    style_pool: StylePool,
}

impl SheetDocument {
    /// Create a new empty document
    ///
    /// The name is sanitized rather than rejected: characters a spreadsheet
    /// application forbids in sheet names are replaced and the result is
    /// truncated to [`MAX_SHEET_NAME_LEN`]. An empty name becomes `"Sheet1"`.
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        Self {
            name: sanitize_sheet_name(name.as_ref()),
            rows: Vec::new(),
            column_widths: BTreeMap::new(),
            style_pool: StylePool::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the sheet name (sanitized like [`SheetDocument::new`])
    pub fn set_name<S: AsRef<str>>(&mut self, name: S) {
        self.name = sanitize_sheet_name(name.as_ref());
    }

    /// Intern a style in this document's pool, returning its index
    pub fn intern_style(&mut self, style: Style) -> u32 {
        self.style_pool.get_or_insert(style)
    }

    /// Get a style by index
    pub fn style(&self, index: u32) -> Option<&Style> {
        self.style_pool.get(index)
    }

    /// Get the style pool
    pub fn style_pool(&self) -> &StylePool {
        &self.style_pool
    }

    /// Append one row of cells, returning its row index
    ///
    /// Style indices are expected to come from [`SheetDocument::intern_style`]
    /// on this same document; an index the pool does not know simply renders
    /// with the default style.
    pub fn append_row<I>(&mut self, cells: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<Cell>,
    {
        let row = Row {
            cells: cells.into_iter().map(Into::into).collect(),
        };
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Set a custom width for a column
    pub fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        if width <= 0.0 || !width.is_finite() {
            return Err(Error::InvalidColumnWidth(width));
        }
        self.column_widths.insert(col, width);
        Ok(())
    }

    /// Get a column's width (default if not customized)
    pub fn column_width(&self, col: u16) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(DEFAULT_COLUMN_WIDTH)
    }

    /// Get all custom column widths (column index → width in characters)
    pub fn custom_column_widths(&self) -> &BTreeMap<u16, f64> {
        &self.column_widths
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Iterate over all rows in emission order
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Number of emitted rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the document has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell's value, `Empty` if the cell does not exist
    pub fn value_at(&self, row: usize, col: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.cell(col))
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Get the non-default style applied to a cell, if any
    pub fn style_at(&self, row: usize, col: usize) -> Option<&Style> {
        let idx = self
            .rows
            .get(row)
            .and_then(|r| r.cell(col))
            .map(|c| c.style_index)?;
        if idx == 0 {
            None
        } else {
            self.style_pool.get(idx)
        }
    }
}

/// Characters spreadsheet applications forbid in sheet names
const INVALID_NAME_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// Sanitize a sheet name: strip forbidden characters, enforce the length cap
fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if INVALID_NAME_CHARS.contains(&c) { ' ' } else { c })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return "Sheet1".to_string();
    }
    trimmed.chars().take(MAX_SHEET_NAME_LEN).collect()
}
