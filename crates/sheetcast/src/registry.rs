//! Style registry and per-document resolution
//!
//! Columns and titles reference styles by [`StyleId`]; the registry maps each
//! id to a [`StyleDef`], a closed set of presentation recipes. Definitions
//! are process-wide and immutable; concrete [`Style`] values are materialized
//! fresh for every document (and per column for body cells, so a column's
//! number format can be layered on without touching any other cell's style).

use std::fmt;

use ahash::AHashMap;
use sheetcast_core::{
    Alignment, BorderLineStyle, Color, FontStyle, NumberFormat, Style,
};

use crate::error::{ExportError, Result};

/// Identifier naming a reusable cell presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(&'static str);

impl StyleId {
    /// Create a style id from a static name
    pub const fn new(name: &'static str) -> Self {
        StyleId(name)
    }

    /// Get the id's name
    pub fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Default header style: thin borders, centered, light orange fill
pub const DEFAULT_HEADER: StyleId = StyleId::new("default-header");
/// Default body style: thin borders, centered, wrapped text
pub const DEFAULT_BODY: StyleId = StyleId::new("default-body");
/// Default title style: bold 15pt font
pub const DEFAULT_TITLE: StyleId = StyleId::new("default-title");
/// Alternate header fill
pub const LIGHT_BLUE: StyleId = StyleId::new("light-blue");
/// Unstyled cells
pub const PLAIN: StyleId = StyleId::new("plain");

/// A style recipe
///
/// The closed set of presentations the exporter knows how to build. Arbitrary
/// one-off presentations go through [`StyleDef::Custom`].
#[derive(Debug, Clone, PartialEq)]
pub enum StyleDef {
    /// Default style, no decoration
    Plain,
    /// Body cells: thin borders, centered, wrapped text
    Body,
    /// Header cells: thin borders, centered, solid fill
    Header {
        /// Fill color behind the header text
        fill: Color,
    },
    /// Title cells: enlarged bold font, no borders
    Title {
        /// Font size in points
        size: f64,
    },
    /// A fully caller-specified style
    Custom(Style),
}

impl StyleDef {
    /// Build a fresh concrete style from this recipe
    pub fn materialize(&self) -> Style {
        match self {
            StyleDef::Plain => Style::new(),
            StyleDef::Body => Style {
                border: sheetcast_core::BorderStyle::all(BorderLineStyle::Thin, Color::Auto),
                alignment: Alignment {
                    wrap_text: true,
                    ..Alignment::centered()
                },
                ..Style::default()
            },
            StyleDef::Header { fill } => Style {
                border: sheetcast_core::BorderStyle::all(BorderLineStyle::Thin, Color::Auto),
                alignment: Alignment::centered(),
                fill: sheetcast_core::FillStyle::solid(*fill),
                ..Style::default()
            },
            StyleDef::Title { size } => Style {
                font: FontStyle::new().with_bold(true).with_size(*size),
                ..Style::default()
            },
            StyleDef::Custom(style) => style.clone(),
        }
    }
}

/// Registry of style definitions, keyed by [`StyleId`]
///
/// Holds recipes, not resolved styles: resolved styles belong to one
/// document's pool and are produced on demand via [`StyleRegistry::materialize`].
#[derive(Debug)]
pub struct StyleRegistry {
    defs: AHashMap<StyleId, StyleDef>,
}

impl StyleRegistry {
    /// Create a registry with the built-in definitions registered
    pub fn new() -> Self {
        let mut registry = Self {
            defs: AHashMap::with_capacity(8),
        };
        registry.register(PLAIN, StyleDef::Plain);
        registry.register(DEFAULT_BODY, StyleDef::Body);
        registry.register(
            DEFAULT_HEADER,
            StyleDef::Header {
                fill: Color::LIGHT_ORANGE,
            },
        );
        registry.register(
            LIGHT_BLUE,
            StyleDef::Header {
                fill: Color::LIGHT_BLUE,
            },
        );
        registry.register(DEFAULT_TITLE, StyleDef::Title { size: 15.0 });
        registry
    }

    /// Register (or replace) a definition
    pub fn register(&mut self, id: StyleId, def: StyleDef) {
        self.defs.insert(id, def);
    }

    /// Look up a definition
    pub fn resolve(&self, id: StyleId) -> Result<&StyleDef> {
        self.defs.get(&id).ok_or(ExportError::UnknownStyle(id))
    }

    /// Materialize a fresh style for the current document
    pub fn materialize(&self, id: StyleId) -> Result<Style> {
        Ok(self.resolve(id)?.materialize())
    }

    /// Materialize a fresh style with a number format layered on top
    ///
    /// The format is applied to the new style instance only; the registered
    /// definition and any previously materialized styles are untouched.
    pub fn materialize_with_format(&self, id: StyleId, format: &NumberFormat) -> Result<Style> {
        let mut style = self.materialize(id)?;
        if !format.is_general() {
            style.number_format = format.clone();
        }
        Ok(style)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Check if the registry has no definitions
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
