// src/buffer.rs

//! The display buffer: a flat RGBA byte array with drawing primitives.
//!
//! [`DisplayBuffer`] owns the pixel bytes for one fixed-size display image
//! and mutates them in place. Every primitive funnels its writes through a
//! single bounds-checked pixel writer, so out-of-range coordinates are
//! silently dropped everywhere. The host reads the bytes back with
//! [`DisplayBuffer::as_bytes`] and uploads them to whatever texture object
//! it manages; nothing here touches a display.
//!
//! The buffer also carries the small amount of drawing state the original
//! call surface depends on: the color used by the most recent rectangle
//! (reused by color-omitting calls), the background color captured by the
//! last full-buffer clear, and the per-font-size layout offsets consumed by
//! the glyph and waveform routines.

mod text;
mod waveform;

#[cfg(test)]
mod tests;

use log::{debug, trace};

use crate::color::Rgb;
use crate::config::{DisplayConfig, FontProfile};
use crate::font::FontSheet;

/// Options for [`DisplayBuffer::draw_rect`].
///
/// `size` defaults to a single pixel and `color` defaults to the color used
/// by the previous rectangle call. The four call shapes of the original
/// surface (explicit/implicit size crossed with explicit/cached color) are
/// all spellings of this one struct.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectOptions {
    /// Rectangle size in pixels; `None` draws a single pixel.
    pub size: Option<(u16, u16)>,
    /// Fill color; `None` reuses the last rectangle color.
    pub color: Option<Rgb>,
}

impl RectOptions {
    /// Explicit size, cached color.
    pub fn sized(w: u16, h: u16) -> Self {
        Self {
            size: Some((w, h)),
            color: None,
        }
    }

    /// Explicit color, 1×1 size.
    pub fn colored(color: Rgb) -> Self {
        Self {
            size: None,
            color: Some(color),
        }
    }

    /// Explicit size and color.
    pub fn new(w: u16, h: u16, color: Rgb) -> Self {
        Self {
            size: Some((w, h)),
            color: Some(color),
        }
    }
}

/// A software framebuffer: `width * height` RGBA pixels plus draw state.
pub struct DisplayBuffer {
    bytes: Vec<u8>,
    width: u16,
    height: u16,

    /// Attached glyph sheet, if any. `None` makes glyph drawing a no-op.
    font: Option<FontSheet>,
    /// Cell metrics derived from the sheet at attach time.
    font_w: u16,
    font_h: u16,

    // Layout knobs, retuned by the host when it switches font size.
    pub x_offset: i16,
    pub y_offset: i16,
    pub font_y_offset: i16,
    pub waveform_max: u8,

    last_color: Rgb,
    background: Rgb,
}

impl DisplayBuffer {
    /// Allocates a zeroed buffer with fixed dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize * 4;
        debug!("display buffer allocated: {}x{} ({} bytes)", width, height, len);
        Self {
            bytes: vec![0; len],
            width,
            height,
            font: None,
            font_w: 0,
            font_h: 0,
            x_offset: 0,
            y_offset: 0,
            font_y_offset: 0,
            waveform_max: 0,
            last_color: Rgb::BLACK,
            background: Rgb::BLACK,
        }
    }

    /// Builds a buffer from a [`DisplayConfig`]: allocates at the configured
    /// dimensions, applies the font profile, and clears to the configured
    /// background.
    pub fn from_config(config: &DisplayConfig) -> Self {
        let mut buffer = Self::new(config.width, config.height);
        buffer.apply_profile(&config.profile);
        buffer.clear(config.background);
        buffer
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The RGBA bytes, row-major, 4 bytes per pixel. This is the slice the
    /// host uploads to its texture after one or more drawing calls.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Color used by the most recent rectangle call.
    pub fn last_color(&self) -> Rgb {
        self.last_color
    }

    /// Color captured by the most recent full-buffer clear.
    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Cell size of the attached font, or `None` when no font is attached.
    pub fn font_metrics(&self) -> Option<(u16, u16)> {
        self.font.as_ref().map(|_| (self.font_w, self.font_h))
    }

    /// Attaches (or detaches, with `None`) a glyph sheet. Cell metrics are
    /// recomputed here, not at draw time.
    pub fn attach_font(&mut self, font: Option<FontSheet>) {
        match &font {
            Some(sheet) => {
                let (cell_w, cell_h) = sheet.cell_size();
                self.font_w = cell_w;
                self.font_h = cell_h;
                debug!(
                    "font attached: {}x{} sheet, {}x{} cells",
                    sheet.width(),
                    sheet.height(),
                    cell_w,
                    cell_h
                );
            }
            None => {
                self.font_w = 0;
                self.font_h = 0;
                debug!("font detached");
            }
        }
        self.font = font;
    }

    /// Applies a font-size profile to the layout knobs.
    pub fn apply_profile(&mut self, profile: &FontProfile) {
        self.x_offset = profile.x_offset;
        self.y_offset = profile.y_offset;
        self.font_y_offset = profile.font_y_offset;
        self.waveform_max = profile.waveform_max;
        debug!("font profile applied: {:?}", profile);
    }

    /// Writes one opaque pixel at `(x, y)`. Out-of-range coordinates are
    /// silently dropped, never an error. Every higher-level primitive
    /// ultimately writes through here.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Rgb) {
        if x >= self.width || y >= self.height {
            return;
        }
        let offset = (x as usize + y as usize * self.width as usize) * 4;
        self.bytes[offset..offset + 4].copy_from_slice(&color.to_rgba_bytes());
    }

    /// Signed-coordinate variant for the offset-adjusted drawing paths.
    /// Negative coordinates are dropped before the unsigned bounds check.
    pub(crate) fn set_pixel_signed(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x > u16::MAX as i32 || y > u16::MAX as i32 {
            return;
        }
        self.set_pixel(x as u16, y as u16, color);
    }

    /// Fills the rectangle `[x, x+w) × [y, y+h)` with a solid color.
    ///
    /// Size and color come from `opts` (see [`RectOptions`] for the
    /// defaults). The color actually used is cached as the last color,
    /// whether or not any pixel lands in bounds. A zero-area rectangle
    /// draws nothing.
    pub fn draw_rect(&mut self, x: u16, y: u16, opts: RectOptions) {
        let (w, h) = opts.size.unwrap_or((1, 1));
        let color = opts.color.unwrap_or(self.last_color);
        self.last_color = color;
        trace!("draw_rect: {}x{} at ({}, {}) color {:?}", w, h, x, y, color);
        for dy in 0..h as u32 {
            let py = y as u32 + dy;
            if py >= self.height as u32 {
                break;
            }
            for dx in 0..w as u32 {
                let px = x as u32 + dx;
                if px >= self.width as u32 {
                    break;
                }
                self.set_pixel(px as u16, py as u16, color);
            }
        }
    }

    /// Fills the whole buffer and caches `color` as the background.
    pub fn clear(&mut self, color: Rgb) {
        debug!("clear: {}x{} to {:?}", self.width, self.height, color);
        self.draw_rect(0, 0, RectOptions::new(self.width, self.height, color));
        self.background = color;
    }
}
