use serde::{Deserialize, Serialize};

/// An sRGB color with alpha, components in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
            a: 1.0,
        }
    }
}

/// Visual defaults for drawn lines and chart markers.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartTheme {
    /// Color newly drawn annotations are created with.
    pub drawn_line: Rgba,
    pub candle_up: Rgba,
    pub candle_down: Rgba,
    pub entry_marker: Rgba,
    pub exit_marker: Rgba,
    pub sma_line: Rgba,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ChartTheme {
    pub fn dark() -> Self {
        Self {
            drawn_line: Rgba::from_hex(0x60a5fa),
            candle_up: Rgba::from_hex(0x10b981),
            candle_down: Rgba::from_hex(0xef4444),
            entry_marker: Rgba::from_hex(0x3b82f6),
            exit_marker: Rgba::from_hex(0xf59e0b),
            sma_line: Rgba::from_hex(0x3b82f6),
        }
    }

    pub fn light() -> Self {
        Self {
            drawn_line: Rgba::from_hex(0x2563eb),
            ..Self::dark()
        }
    }
}
