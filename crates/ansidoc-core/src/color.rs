/// RGBA color with 8-bit channels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Rgba {
    fn default() -> Self {
        DEFAULT_FG
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl Rgba {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Default foreground: base white, the DOS screen attribute 0x07.
pub const DEFAULT_FG: Rgba = Rgba::rgb(170, 170, 170);
/// Default background: black.
pub const DEFAULT_BG: Rgba = Rgba::rgb(0, 0, 0);

// 16-color CGA/VGA palette
pub const COLOR_PALETTE: [Rgba; 16] = [
    // Basic 8 colors
    Rgba::rgb(0, 0, 0),       // Black
    Rgba::rgb(170, 0, 0),     // Red
    Rgba::rgb(0, 170, 0),     // Green
    Rgba::rgb(170, 85, 0),    // Yellow (brown on CGA hardware)
    Rgba::rgb(0, 0, 170),     // Blue
    Rgba::rgb(170, 0, 170),   // Magenta
    Rgba::rgb(0, 170, 170),   // Cyan
    Rgba::rgb(170, 170, 170), // White
    // Bright colors
    Rgba::rgb(85, 85, 85),    // Bright Black (Gray)
    Rgba::rgb(255, 85, 85),   // Bright Red
    Rgba::rgb(85, 255, 85),   // Bright Green
    Rgba::rgb(255, 255, 85),  // Bright Yellow
    Rgba::rgb(85, 85, 255),   // Bright Blue
    Rgba::rgb(255, 85, 255),  // Bright Magenta
    Rgba::rgb(85, 255, 255),  // Bright Cyan
    Rgba::rgb(255, 255, 255), // Bright White
];

/// Resolve a base palette index (0..=7). Out-of-range indices are masked.
pub fn base_color(idx: u8) -> Rgba {
    COLOR_PALETTE[idx as usize & 7]
}

/// Resolve the bright counterpart of a base palette index (0..=7).
pub fn bright_color(idx: u8) -> Rgba {
    COLOR_PALETTE[(idx as usize & 7) + 8]
}
