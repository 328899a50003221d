//! Display colors for facelet symbols.

use serde::{Deserialize, Serialize};

/// A 24-bit display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a display color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex form, `#rrggbb`.
    #[must_use]
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Neutral fallback for facelet symbols outside the six known ones.
pub const FALLBACK: Rgb = Rgb::new(0xcc, 0xcc, 0xcc);

/// Map a facelet symbol to its display color.
///
/// The six engine symbols map to fixed values; anything else gets the
/// neutral grey fallback rather than failing.
#[must_use]
pub const fn display_color(symbol: char) -> Rgb {
    match symbol {
        'w' => Rgb::new(0xff, 0xff, 0xff),
        'y' => Rgb::new(0xff, 0xff, 0x00),
        'r' => Rgb::new(0xff, 0x00, 0x00),
        'o' => Rgb::new(0xff, 0x80, 0x00),
        'g' => Rgb::new(0x00, 0xff, 0x00),
        'b' => Rgb::new(0x00, 0x00, 0xff),
        _ => FALLBACK,
    }
}
