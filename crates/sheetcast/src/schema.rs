//! Column schema types
//!
//! A [`SheetSchema`] is the statically declared counterpart of annotation
//! scanning: one [`ColumnSpec`] per exported field, in declaration order,
//! plus an optional [`TitleSpec`]. Schemas are built once per record type
//! through [`SheetSchemaBuilder`], validated at build time, and are immutable
//! and deterministic afterwards.

use std::fmt;

use sheetcast_core::NumberFormat;

use crate::error::SchemaError;
use crate::field::FieldValue;
use crate::locale::Locale;
use crate::registry::{self, StyleId};

/// Default column width in sheet width units (16 characters)
pub const DEFAULT_WIDTH: f64 = 16.0;

/// Accessor reading one field off a record
pub type FieldReader<T> = fn(&T) -> FieldValue;

/// How one field of `T` becomes one spreadsheet column
pub struct ColumnSpec<T> {
    field: &'static str,
    header: String,
    header_alt: String,
    width: f64,
    header_style: StyleId,
    body_style: StyleId,
    format: NumberFormat,
    default_text: String,
    read: FieldReader<T>,
}

impl<T> ColumnSpec<T> {
    /// Field name this column reads
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Primary-language header text (post-fallback; may be empty)
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Alternate-language header text (post-fallback; may be empty)
    pub fn header_alt(&self) -> &str {
        &self.header_alt
    }

    /// Locale-selected header text
    pub fn header_text(&self, locale: Locale) -> &str {
        locale.select(&self.header, &self.header_alt)
    }

    /// Column width in sheet width units
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Style id for the header cell
    pub fn header_style(&self) -> StyleId {
        self.header_style
    }

    /// Style id for body cells
    pub fn body_style(&self) -> StyleId {
        self.body_style
    }

    /// Number/date format for body cells
    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Text substituted for absent values
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    /// Read this column's value off a record
    pub fn read(&self, record: &T) -> FieldValue {
        (self.read)(record)
    }
}

impl<T> fmt::Debug for ColumnSpec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("field", &self.field)
            .field("header", &self.header)
            .field("header_alt", &self.header_alt)
            .field("width", &self.width)
            .field("header_style", &self.header_style)
            .field("body_style", &self.body_style)
            .field("format", &self.format)
            .field("default_text", &self.default_text)
            .finish()
    }
}

/// Declaration of a single column, consumed by [`SheetSchemaBuilder::column`]
pub struct ColumnDef<T> {
    field: &'static str,
    header: String,
    header_alt: String,
    width: f64,
    header_style: StyleId,
    body_style: StyleId,
    format: NumberFormat,
    default_text: String,
    read: FieldReader<T>,
}

impl<T> ColumnDef<T> {
    /// Start declaring a column for a named field with its accessor
    pub fn new(field: &'static str, read: FieldReader<T>) -> Self {
        Self {
            field,
            header: String::new(),
            header_alt: String::new(),
            width: DEFAULT_WIDTH,
            header_style: registry::DEFAULT_HEADER,
            body_style: registry::DEFAULT_BODY,
            format: NumberFormat::General,
            default_text: String::new(),
            read,
        }
    }

    /// Primary-language header label
    pub fn header<S: Into<String>>(mut self, header: S) -> Self {
        self.header = header.into();
        self
    }

    /// Alternate-language header label
    pub fn header_alt<S: Into<String>>(mut self, header_alt: S) -> Self {
        self.header_alt = header_alt.into();
        self
    }

    /// Column width in sheet width units
    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Style for the header cell
    pub fn header_style(mut self, id: StyleId) -> Self {
        self.header_style = id;
        self
    }

    /// Style for body cells
    pub fn body_style(mut self, id: StyleId) -> Self {
        self.body_style = id;
        self
    }

    /// Number/date format pattern for body cells (empty = none)
    pub fn format<S: Into<String>>(mut self, pattern: S) -> Self {
        self.format = NumberFormat::from_pattern(pattern.into());
        self
    }

    /// Text to render when the field value is absent
    pub fn default_text<S: Into<String>>(mut self, text: S) -> Self {
        self.default_text = text.into();
        self
    }
}

/// Type-level title/total declaration
#[derive(Debug, Clone, PartialEq)]
pub struct TitleSpec {
    use_title: bool,
    use_total: bool,
    title_style: StyleId,
    title: String,
    title_alt: String,
    total_label: String,
    total_label_alt: String,
}

impl TitleSpec {
    /// Create a title spec with both rows enabled and empty text
    pub fn new() -> Self {
        Self {
            use_title: true,
            use_total: true,
            title_style: registry::DEFAULT_TITLE,
            title: String::new(),
            title_alt: String::new(),
            total_label: "전체 : ".to_string(),
            total_label_alt: "Total : ".to_string(),
        }
    }

    /// Enable or disable the title row
    pub fn use_title(mut self, on: bool) -> Self {
        self.use_title = on;
        self
    }

    /// Enable or disable the record-count row
    pub fn use_total(mut self, on: bool) -> Self {
        self.use_total = on;
        self
    }

    /// Style for the title cell
    pub fn title_style(mut self, id: StyleId) -> Self {
        self.title_style = id;
        self
    }

    /// Primary-language title text
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = title.into();
        self
    }

    /// Alternate-language title text
    pub fn title_alt<S: Into<String>>(mut self, title_alt: S) -> Self {
        self.title_alt = title_alt.into();
        self
    }

    /// Primary-language label prefixed to the record count
    pub fn total_label<S: Into<String>>(mut self, label: S) -> Self {
        self.total_label = label.into();
        self
    }

    /// Alternate-language label prefixed to the record count
    pub fn total_label_alt<S: Into<String>>(mut self, label: S) -> Self {
        self.total_label_alt = label.into();
        self
    }

    /// Whether the title row is enabled
    pub fn title_enabled(&self) -> bool {
        self.use_title
    }

    /// Whether the record-count row is enabled
    pub fn total_enabled(&self) -> bool {
        self.use_total
    }

    /// The title style id
    pub fn style(&self) -> StyleId {
        self.title_style
    }

    /// Locale-selected title text
    pub fn title_text(&self, locale: Locale) -> &str {
        locale.select(&self.title, &self.title_alt)
    }

    /// Locale-selected count label
    pub fn total_label_text(&self, locale: Locale) -> &str {
        locale.select(&self.total_label, &self.total_label_alt)
    }
}

impl Default for TitleSpec {
    fn default() -> Self {
        Self::new()
    }
}

/// The full column schema for one record type
pub struct SheetSchema<T> {
    columns: Vec<ColumnSpec<T>>,
    title: Option<TitleSpec>,
}

impl<T> SheetSchema<T> {
    /// Start building a schema
    pub fn builder() -> SheetSchemaBuilder<T> {
        SheetSchemaBuilder {
            columns: Vec::new(),
            title: None,
        }
    }

    /// The ordered column descriptors
    pub fn columns(&self) -> &[ColumnSpec<T>] {
        &self.columns
    }

    /// Number of declared columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The title declaration, if any
    pub fn title(&self) -> Option<&TitleSpec> {
        self.title.as_ref()
    }
}

impl<T> fmt::Debug for SheetSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetSchema")
            .field("columns", &self.columns)
            .field("title", &self.title)
            .finish()
    }
}

/// Builder for [`SheetSchema`]
pub struct SheetSchemaBuilder<T> {
    columns: Vec<ColumnDef<T>>,
    title: Option<TitleSpec>,
}

impl<T> SheetSchemaBuilder<T> {
    /// Declare the next column; declaration order is column order
    pub fn column(mut self, def: ColumnDef<T>) -> Self {
        self.columns.push(def);
        self
    }

    /// Attach a title/total declaration
    pub fn title(mut self, title: TitleSpec) -> Self {
        self.title = Some(title);
        self
    }

    /// Validate the declarations and build the schema
    ///
    /// Applies the header fallback rule: an empty label inherits the other
    /// language's label; both empty stays empty. Duplicate field names and
    /// non-positive widths are rejected.
    pub fn build(self) -> std::result::Result<SheetSchema<T>, SchemaError> {
        let mut columns = Vec::with_capacity(self.columns.len());
        let mut seen: Vec<&'static str> = Vec::with_capacity(self.columns.len());

        for (i, def) in self.columns.into_iter().enumerate() {
            if def.field.is_empty() {
                return Err(SchemaError::EmptyFieldName(i));
            }
            if seen.contains(&def.field) {
                return Err(SchemaError::DuplicateField(def.field.to_string()));
            }
            if def.width <= 0.0 || !def.width.is_finite() {
                return Err(SchemaError::InvalidWidth {
                    field: def.field.to_string(),
                    width: def.width,
                });
            }
            seen.push(def.field);

            let (header, header_alt) = match (def.header.is_empty(), def.header_alt.is_empty()) {
                (true, false) => (def.header_alt.clone(), def.header_alt),
                (false, true) => (def.header.clone(), def.header),
                _ => (def.header, def.header_alt),
            };

            columns.push(ColumnSpec {
                field: def.field,
                header,
                header_alt,
                width: def.width,
                header_style: def.header_style,
                body_style: def.body_style,
                format: def.format,
                default_text: def.default_text,
                read: def.read,
            });
        }

        Ok(SheetSchema {
            columns,
            title: self.title,
        })
    }
}
