//! Locale selection for header and title text
//!
//! Text selection in the exporter is deliberately binary: the schema carries
//! a primary label and an alternate-language label per column/title, and a
//! resolved [`Locale`] picks between them. Actual locale negotiation
//! (Accept-Language parsing, user preferences) is the caller's job.

/// A resolved display locale, as seen by the exporter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// The primary (default) language
    #[default]
    Primary,
    /// Any non-primary language; selects alternate-language text
    Alternate,
}

impl Locale {
    /// Check if this is the primary locale
    pub fn is_primary(self) -> bool {
        matches!(self, Locale::Primary)
    }

    /// Pick between a primary and an alternate text variant
    pub fn select<'a>(self, primary: &'a str, alternate: &'a str) -> &'a str {
        match self {
            Locale::Primary => primary,
            Locale::Alternate => alternate,
        }
    }

    /// Classify an already-resolved language tag against the primary tag
    ///
    /// Comparison is on the language subtag only, case-insensitively:
    /// `from_tag("ko-KR", "ko")` is [`Locale::Primary`].
    pub fn from_tag(tag: &str, primary: &str) -> Self {
        let lang = |t: &str| {
            t.split(['-', '_'])
                .next()
                .unwrap_or(t)
                .to_ascii_lowercase()
        };
        if lang(tag) == lang(primary) {
            Locale::Primary
        } else {
            Locale::Alternate
        }
    }
}
