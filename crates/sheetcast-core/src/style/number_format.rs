//! Number format types

/// Number format for cell display
///
/// Format pattern strings are opaque to the engine; they are carried through
/// to the encoder verbatim (e.g. `#,##0.00`, `yyyy-mm-dd`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// Create a number format from a format string
    ///
    /// An empty pattern means "no special format" and maps to `General`.
    pub fn from_pattern<S: Into<String>>(pattern: S) -> Self {
        let pattern = pattern.into();
        if pattern.is_empty() {
            NumberFormat::General
        } else {
            NumberFormat::Custom(pattern)
        }
    }

    /// Get the format string
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::Custom(s) => s,
        }
    }

    /// Check if this is the general (no-op) format
    pub fn is_general(&self) -> bool {
        matches!(self, NumberFormat::General)
    }

    /// Check if this looks like a date/time format
    pub fn is_date_format(&self) -> bool {
        match self {
            NumberFormat::General => false,
            NumberFormat::Custom(s) => {
                // Heuristic: date/time placeholders, no quoted literal text
                let lower = s.to_lowercase();
                (lower.contains('y')
                    || lower.contains('m')
                    || lower.contains('d')
                    || lower.contains('h')
                    || lower.contains('s'))
                    && !lower.contains('"')
            }
        }
    }
}
