// src/buffer/text.rs

//! Glyph and text drawing.
//!
//! Characters are blitted cell-by-cell from the attached [`FontSheet`]: a
//! set bit writes the foreground color, a clear bit writes the background
//! color, so a glyph always repaints its whole cell. Destinations are
//! adjusted by the buffer's layout offsets before writing.
//!
//! [`FontSheet`]: crate::font::FontSheet

use log::trace;

use super::DisplayBuffer;
use crate::color::Rgb;

impl DisplayBuffer {
    /// Blits the font cell for `ch` at `(x, y)` in `fg` over `bg`.
    ///
    /// The cell is looked up in the attached sheet by the character's grid
    /// position; `ch` is masked to 7 bits. The destination is adjusted by
    /// `x_offset` and `y_offset + font_y_offset`. With no font attached
    /// this is a no-op; out-of-bounds destination pixels are dropped by the
    /// pixel writer.
    pub fn draw_char(&mut self, ch: u8, x: u16, y: u16, fg: Rgb, bg: Rgb) {
        let Some(font) = self.font.clone() else {
            trace!("draw_char: no font attached, dropping {:#04x}", ch);
            return;
        };
        let (src_x, src_y) = font.glyph_origin(ch);
        let dst_x = x as i32 + self.x_offset as i32;
        let dst_y = y as i32 + self.y_offset as i32 + self.font_y_offset as i32;
        for dy in 0..self.font_h {
            for dx in 0..self.font_w {
                let set = font.bit_at(src_x + dx, src_y + dy);
                let color = if set { fg } else { bg };
                self.set_pixel_signed(dst_x + dx as i32, dst_y + dy as i32, color);
            }
        }
    }

    /// Draws `text` left to right from `(x, y)`, advancing one cell per
    /// character. Non-ASCII characters advance without drawing, leaving
    /// their cell untouched. A no-op when no font is attached.
    pub fn draw_text(&mut self, text: &str, x: u16, y: u16, fg: Rgb, bg: Rgb) {
        let Some((cell_w, _)) = self.font_metrics() else {
            trace!("draw_text: no font attached, dropping {:?}", text);
            return;
        };
        let mut pen_x = x as u32;
        for ch in text.chars() {
            if pen_x > u16::MAX as u32 {
                break;
            }
            if ch.is_ascii() {
                self.draw_char(ch as u8, pen_x as u16, y, fg, bg);
            }
            pen_x += cell_w as u32;
        }
    }
}
