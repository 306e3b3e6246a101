//! Liquid colors.
//!
//! A `Color` is one segment of liquid. Segments carry no identity beyond
//! their color code: two segments with the same code are interchangeable.
//!
//! ```
//! use liquid_sort::core::Color;
//!
//! let red = Color::new("#FF6B6B");
//! assert_eq!(red, Color::new("#FF6B6B"));
//! assert_ne!(red, Color::new("#4ECDC4"));
//! ```

use serde::{Deserialize, Serialize};

/// Preset palette used by the level generator, in selection order.
pub const PALETTE: [&str; 11] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFEAA7", "#DDA0DD", "#6A0DAD", "#98D8C8", "#85C1E9",
    "#F8B500", "#58D68D", "#D35400",
];

/// One unit of liquid, identified by its color code (typically a hex string).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    code: String,
}

impl Color {
    /// Create a color from its code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// The color code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The first `count` palette colors, or `None` if the palette is too small.
    #[must_use]
    pub fn palette(count: usize) -> Option<Vec<Color>> {
        if count > PALETTE.len() {
            return None;
        }
        Some(PALETTE[..count].iter().map(|&code| Color::new(code)).collect())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}
