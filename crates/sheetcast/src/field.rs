//! Field values and cell coercion
//!
//! [`FieldValue`] is the closed set of value kinds a column accessor can
//! produce. It is computed once when the value is read off a record; from
//! there [`coerce`] maps it to a spreadsheet-native [`CellValue`] without
//! ever re-inspecting runtime types.

use chrono::{NaiveDate, NaiveDateTime};
use sheetcast_core::CellValue;

/// A raw field value read off a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Missing value; renders the column's default text
    Absent,
    /// Any numeric value, widened to f64
    Number(f64),
    /// Date-and-time value
    DateTime(NaiveDateTime),
    /// Calendar-date-only value
    Date(NaiveDate),
    /// Boolean value
    Boolean(bool),
    /// Anything else, as its text representation
    Text(String),
}

impl FieldValue {
    /// Check whether the value is absent
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// Map a field value to its spreadsheet-native representation
///
/// The default text substitutes for [`FieldValue::Absent`] only; a present
/// but empty text value renders verbatim.
pub fn coerce(value: FieldValue, default_text: &str) -> CellValue {
    match value {
        FieldValue::Absent => CellValue::text(default_text),
        FieldValue::Number(n) => CellValue::Number(n),
        FieldValue::DateTime(dt) => CellValue::DateTime(dt),
        FieldValue::Date(d) => CellValue::Date(d),
        FieldValue::Boolean(b) => CellValue::Boolean(b),
        FieldValue::Text(s) => CellValue::Text(s),
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

// Integral types are widened through f64; magnitudes past 2^53 lose precision.
impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<u64> for FieldValue {
    fn from(n: u64) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<f32> for FieldValue {
    fn from(n: f32) -> Self {
        FieldValue::Number(n as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::Text(s.clone())
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::DateTime(dt)
    }
}

impl<V: Into<FieldValue>> From<Option<V>> for FieldValue {
    fn from(opt: Option<V>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => FieldValue::Absent,
        }
    }
}
