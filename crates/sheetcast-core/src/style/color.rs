//! Color representation

/// Cell/font color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Color {
    /// Automatic color (theme default)
    #[default]
    Auto,
    /// RGB color
    Rgb {
        /// Red component
        r: u8,
        /// Green component
        g: u8,
        /// Blue component
        b: u8,
    },
}

impl Color {
    /// Black
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    /// White
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
    /// Light orange (the classic header fill)
    pub const LIGHT_ORANGE: Color = Color::rgb(0xFF, 0x99, 0x33);
    /// Light blue
    pub const LIGHT_BLUE: Color = Color::rgb(0x33, 0x66, 0xFF);

    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Hex string form ("RRGGBB"), black for `Auto`
    pub fn to_hex(&self) -> String {
        match self {
            Color::Auto => "000000".to_string(),
            Color::Rgb { r, g, b } => format!("{:02X}{:02X}{:02X}", r, g, b),
        }
    }
}
