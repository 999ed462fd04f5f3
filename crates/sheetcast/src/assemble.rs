//! Sheet assembly
//!
//! [`build_sheet`] turns a record list plus its schema into a finished
//! [`SheetDocument`]. Row order is fixed: optional title row, optional
//! record-count row, exactly one header row, then one body row per record in
//! input order. All styles are resolved up front so a bad style reference
//! aborts before any row is emitted.

use log::{debug, trace};
use sheetcast_core::{Cell, CellValue, SheetDocument};

use crate::error::Result;
use crate::field::{coerce, FieldValue};
use crate::locale::Locale;
use crate::registry::StyleRegistry;
use crate::schema::SheetSchema;

/// Per-call export settings
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    locale: Locale,
    file_name: String,
    title_suffix: Option<String>,
}

impl ExportOptions {
    /// Create default options: primary locale, no file name, no suffix
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display locale
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the download/file name, substituted when the title text is empty
    pub fn file_name<S: Into<String>>(mut self, name: S) -> Self {
        self.file_name = name.into();
        self
    }

    /// Append extra text to the title (e.g. a date range)
    pub fn title_suffix<S: Into<String>>(mut self, suffix: S) -> Self {
        self.title_suffix = Some(suffix.into());
        self
    }
}

/// Build a sheet document from a record list
///
/// Returns an in-memory document ready for an encoder; no transport is
/// involved. An empty record list is valid and produces a document that ends
/// after the header row.
pub fn build_sheet<T>(
    records: &[T],
    schema: &SheetSchema<T>,
    registry: &StyleRegistry,
    options: &ExportOptions,
) -> Result<SheetDocument> {
    let locale = options.locale;
    let columns = schema.columns();

    debug!(
        "building sheet: {} column(s), {} record(s)",
        columns.len(),
        records.len()
    );

    // Resolve every referenced style before emitting anything, so an unknown
    // id fails the export with no partial document.
    let title_style = match schema.title() {
        Some(t) if t.title_enabled() => Some(registry.materialize(t.style())?),
        _ => None,
    };
    let header_styles = columns
        .iter()
        .map(|c| registry.materialize(c.header_style()))
        .collect::<Result<Vec<_>>>()?;
    let body_styles = columns
        .iter()
        .map(|c| registry.materialize_with_format(c.body_style(), c.format()))
        .collect::<Result<Vec<_>>>()?;

    let mut doc = SheetDocument::new("");

    // Title and total rows
    let mut sheet_title = String::new();
    if let Some(title) = schema.title() {
        if title.title_enabled() {
            sheet_title = title.title_text(locale).to_string();
            if let Some(suffix) = &options.title_suffix {
                sheet_title.push_str(suffix);
            }
            if sheet_title.is_empty() {
                sheet_title = options.file_name.clone();
            }

            let style_index = match title_style {
                Some(style) => doc.intern_style(style),
                None => 0,
            };
            doc.append_row([Cell::with_style(CellValue::text(&sheet_title), style_index)]);
        }

        if title.total_enabled() {
            let label = title.total_label_text(locale);
            doc.append_row([Cell::new(CellValue::text(format!(
                "{}{}",
                label,
                records.len()
            )))]);
        }
    }

    // Empty title text falls back to the fixed default name inside the
    // document's sanitizer.
    doc.set_name(&sheet_title);

    // Header row, one cell per column in declaration order
    let mut header_cells = Vec::with_capacity(columns.len());
    for (i, (col, style)) in columns.iter().zip(header_styles).enumerate() {
        doc.set_column_width(i as u16, col.width())?;

        let text = col.header_text(locale);
        let value = if text.is_empty() {
            FieldValue::Absent
        } else {
            FieldValue::Text(text.to_string())
        };
        let style_index = doc.intern_style(style);
        header_cells.push(Cell::with_style(
            coerce(value, col.default_text()),
            style_index,
        ));
    }
    doc.append_row(header_cells);

    if records.is_empty() {
        debug!("no records; finishing after header row");
        return Ok(doc);
    }

    // Body rows; one body style per column per document, format included
    let body_indices: Vec<u32> = body_styles
        .into_iter()
        .map(|s| doc.intern_style(s))
        .collect();

    for (n, record) in records.iter().enumerate() {
        let cells: Vec<Cell> = columns
            .iter()
            .zip(&body_indices)
            .map(|(col, &style_index)| {
                Cell::with_style(coerce(col.read(record), col.default_text()), style_index)
            })
            .collect();
        let row = doc.append_row(cells);
        trace!("emitted body row {} for record {}", row, n);
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ColumnDef, TitleSpec};
    use pretty_assertions::assert_eq;

    struct Item {
        label: String,
        count: i64,
    }

    fn schema_with_title() -> SheetSchema<Item> {
        SheetSchema::builder()
            .title(TitleSpec::new().title("재고").title_alt("Inventory"))
            .column(ColumnDef::new("label", |i: &Item| (&i.label).into()).header("품명"))
            .column(ColumnDef::new("count", |i: &Item| i.count.into()).header("수량"))
            .build()
            .unwrap()
    }

    #[test]
    fn test_row_sequencing_with_title_and_total() {
        let items = [Item {
            label: "bolt".into(),
            count: 3,
        }];
        let doc = build_sheet(
            &items,
            &schema_with_title(),
            &StyleRegistry::new(),
            &ExportOptions::new(),
        )
        .unwrap();

        // title, total, header, one body row
        assert_eq!(doc.row_count(), 4);
        assert_eq!(doc.value_at(0, 0), CellValue::text("재고"));
        assert_eq!(doc.value_at(1, 0), CellValue::text("전체 : 1"));
        assert_eq!(doc.value_at(2, 0), CellValue::text("품명"));
        assert_eq!(doc.value_at(3, 1), CellValue::Number(3.0));
        assert_eq!(doc.name(), "재고");
    }

    #[test]
    fn test_no_title_spec_starts_at_header() {
        let schema: SheetSchema<Item> = SheetSchema::builder()
            .column(ColumnDef::new("count", |i: &Item| i.count.into()).header("수량"))
            .build()
            .unwrap();
        let doc = build_sheet(
            &[],
            &schema,
            &StyleRegistry::new(),
            &ExportOptions::new(),
        )
        .unwrap();

        assert_eq!(doc.row_count(), 1);
        assert_eq!(doc.value_at(0, 0), CellValue::text("수량"));
        assert_eq!(doc.name(), "Sheet1");
    }

    #[test]
    fn test_total_row_is_text_not_numeric() {
        let doc = build_sheet(
            &[],
            &schema_with_title(),
            &StyleRegistry::new(),
            &ExportOptions::new().locale(Locale::Alternate),
        )
        .unwrap();
        assert_eq!(doc.value_at(1, 0), CellValue::text("Total : 0"));
        assert_eq!(doc.value_at(1, 0).as_number(), None);
    }

    #[test]
    fn test_column_widths_applied() {
        let schema: SheetSchema<Item> = SheetSchema::builder()
            .column(ColumnDef::new("label", |i: &Item| (&i.label).into()).width(24.0))
            .column(ColumnDef::new("count", |i: &Item| i.count.into()))
            .build()
            .unwrap();
        let doc = build_sheet(&[], &schema, &StyleRegistry::new(), &ExportOptions::new()).unwrap();

        assert_eq!(doc.column_width(0), 24.0);
        assert_eq!(doc.column_width(1), crate::schema::DEFAULT_WIDTH);
    }
}
