// src/color.rs

//! Defines the `Rgb` color triple used by every drawing operation, and its
//! conversion to the opaque RGBA byte form the framebuffer stores.

use serde::{Deserialize, Serialize};

/// An RGB true color, 8 bits per channel.
///
/// Drawing operations take colors as `Rgb` triples and always commit them to
/// the framebuffer as fully opaque RGBA (alpha `0xFF`). There is no palette
/// or indexed form at this layer; hosts that want named colors can use the
/// associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    // Common sRGB values for the eight standard colors.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(205, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 205, 0);
    pub const YELLOW: Rgb = Rgb::new(205, 205, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 238);
    pub const MAGENTA: Rgb = Rgb::new(205, 0, 205);
    pub const CYAN: Rgb = Rgb::new(0, 205, 205);
    pub const WHITE: Rgb = Rgb::new(229, 229, 229);

    /// The 4-byte opaque RGBA form stored in the framebuffer.
    pub const fn to_rgba_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, 0xFF]
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Rgb::new(r, g, b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb::new(r, g, b)
    }
}
