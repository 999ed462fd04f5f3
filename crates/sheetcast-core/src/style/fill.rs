//! Fill style types

use super::Color;

/// Background fill for a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FillStyle {
    /// No fill
    #[default]
    None,
    /// Solid color fill
    Solid {
        /// Fill color
        color: Color,
    },
}

impl FillStyle {
    /// Create a solid fill
    pub fn solid(color: Color) -> Self {
        FillStyle::Solid { color }
    }

    /// Check if there is no fill
    pub fn is_none(&self) -> bool {
        matches!(self, FillStyle::None)
    }
}
