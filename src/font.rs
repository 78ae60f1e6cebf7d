// src/font.rs

//! Monochrome bitmap font sheets.
//!
//! A [`FontSheet`] is a 1-bpp bitmap holding a fixed grid of
//! [`SHEET_COLS`] × [`SHEET_ROWS`] glyph cells, one cell per 7-bit character
//! code. Sheets are supplied by the host (or taken from the compiled-in
//! ASCII sheet) and attached to a `DisplayBuffer`, which derives the
//! per-cell metrics at attach time. The glyph bits live behind an
//! `Arc<[u8]>`, so cloning a sheet is cheap and the host keeps its own
//! handle to the same data.

use std::sync::Arc;

use anyhow::{bail, Result};
use log::debug;
use once_cell::sync::Lazy;

/// Number of glyph cells per sheet row.
pub const SHEET_COLS: u16 = 16;
/// Number of glyph cell rows per sheet.
pub const SHEET_ROWS: u16 = 8;
/// Total glyph cells in a sheet (one per 7-bit code).
pub const GLYPH_COUNT: usize = (SHEET_COLS * SHEET_ROWS) as usize;

/// A monochrome glyph sheet: packed MSB-first rows, one bit per pixel.
///
/// Rows are padded to whole bytes; for grid-valid widths (multiples of 16)
/// there is no padding. The sheet is immutable once built.
#[derive(Debug, Clone)]
pub struct FontSheet {
    width: u16,
    height: u16,
    /// Bytes per packed row.
    stride: usize,
    bits: Arc<[u8]>,
}

impl FontSheet {
    /// Builds a sheet from packed 1-bpp rows (MSB-first, byte-padded).
    ///
    /// Fails if the dimensions are zero, are not divisible by the
    /// 16×8 glyph grid, or if `rows` is not exactly `stride * height` bytes.
    pub fn from_packed(width: u16, height: u16, rows: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("font sheet dimensions must be non-zero, got {}x{}", width, height);
        }
        if width % SHEET_COLS != 0 || height % SHEET_ROWS != 0 {
            bail!(
                "font sheet {}x{} does not divide into a {}x{} glyph grid",
                width,
                height,
                SHEET_COLS,
                SHEET_ROWS
            );
        }
        let stride = (width as usize + 7) / 8;
        let expected = stride * height as usize;
        if rows.len() != expected {
            bail!(
                "font sheet bit data is {} bytes, expected {} for {}x{}",
                rows.len(),
                expected,
                width,
                height
            );
        }
        debug!("font sheet built: {}x{} px, {} byte stride", width, height, stride);
        Ok(Self {
            width,
            height,
            stride,
            bits: rows.into(),
        })
    }

    /// Builds a sheet from a per-glyph byte table: [`GLYPH_COUNT`] glyphs,
    /// each 8 pixels wide and `glyph_height` rows tall, one MSB-first byte
    /// per row. This is the layout classic console fonts ship in.
    pub fn from_glyphs(glyph_height: u16, glyphs: &[u8]) -> Result<Self> {
        if glyph_height == 0 || glyph_height > u16::MAX / SHEET_ROWS {
            bail!("glyph height {} outside the supported range", glyph_height);
        }
        let expected = GLYPH_COUNT * glyph_height as usize;
        if glyphs.len() != expected {
            bail!(
                "glyph table is {} bytes, expected {} ({} glyphs of {} rows)",
                glyphs.len(),
                expected,
                GLYPH_COUNT,
                glyph_height
            );
        }

        let width = SHEET_COLS * 8;
        let height = SHEET_ROWS * glyph_height;
        let stride = width as usize / 8;
        let mut rows = vec![0u8; stride * height as usize];
        for glyph in 0..GLYPH_COUNT {
            let col = glyph % SHEET_COLS as usize;
            let grid_row = glyph / SHEET_COLS as usize;
            for dy in 0..glyph_height as usize {
                let y = grid_row * glyph_height as usize + dy;
                rows[y * stride + col] = glyphs[glyph * glyph_height as usize + dy];
            }
        }
        Self::from_packed(width, height, rows)
    }

    /// The compiled-in 8×8 ASCII sheet. Covers the printable range
    /// (32..=126); every other cell is blank. Cheap to clone.
    pub fn builtin() -> FontSheet {
        BUILTIN_SHEET.clone()
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Per-glyph cell size derived from the sheet dimensions and the grid.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.width / SHEET_COLS, self.height / SHEET_ROWS)
    }

    /// Top-left sheet coordinate of the cell for `ch`.
    ///
    /// `ch` is masked to 7 bits so every byte maps into the grid.
    pub fn glyph_origin(&self, ch: u8) -> (u16, u16) {
        let code = (ch & 0x7F) as u16;
        let (cell_w, cell_h) = self.cell_size();
        ((code % SHEET_COLS) * cell_w, (code / SHEET_COLS) * cell_h)
    }

    /// Whether the sheet bit at `(x, y)` is set. Out-of-range reads are
    /// clear, matching the silent-clamp behavior of the drawing layer.
    pub fn bit_at(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.bits[y as usize * self.stride + (x / 8) as usize];
        byte & (0x80 >> (x % 8)) != 0
    }
}

static BUILTIN_SHEET: Lazy<FontSheet> = Lazy::new(|| {
    let mut glyphs = vec![0u8; GLYPH_COUNT * 8];
    glyphs[32 * 8..127 * 8].copy_from_slice(&BUILTIN_GLYPHS);
    FontSheet::from_glyphs(8, &glyphs).expect("builtin glyph table is well formed")
});

/// 8×8 glyphs for ASCII 32..=126, one MSB-first byte per row.
const BUILTIN_GLYPHS: [u8; 95 * 8] = [
    // ' ' (32)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '!' (33)
    0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x18, 0x00,
    // '"' (34)
    0x6C, 0x6C, 0x24, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '#' (35)
    0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00,
    // '$' (36)
    0x18, 0x7E, 0xC0, 0x7C, 0x06, 0xFC, 0x18, 0x00,
    // '%' (37)
    0x00, 0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00,
    // '&' (38)
    0x38, 0x6C, 0x38, 0x76, 0xDC, 0xCC, 0x76, 0x00,
    // '\'' (39)
    0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '(' (40)
    0x0C, 0x18, 0x30, 0x30, 0x30, 0x18, 0x0C, 0x00,
    // ')' (41)
    0x30, 0x18, 0x0C, 0x0C, 0x0C, 0x18, 0x30, 0x00,
    // '*' (42)
    0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00,
    // '+' (43)
    0x00, 0x18, 0x18, 0x7E, 0x18, 0x18, 0x00, 0x00,
    // ',' (44)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30,
    // '-' (45)
    0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00,
    // '.' (46)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00,
    // '/' (47)
    0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x80, 0x00,
    // '0' (48)
    0x7C, 0xCE, 0xDE, 0xF6, 0xE6, 0xC6, 0x7C, 0x00,
    // '1' (49)
    0x18, 0x38, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00,
    // '2' (50)
    0x7C, 0xC6, 0x06, 0x7C, 0xC0, 0xC0, 0xFE, 0x00,
    // '3' (51)
    0xFC, 0x06, 0x06, 0x3C, 0x06, 0x06, 0xFC, 0x00,
    // '4' (52)
    0x0C, 0xCC, 0xCC, 0xCC, 0xFE, 0x0C, 0x0C, 0x00,
    // '5' (53)
    0xFE, 0xC0, 0xFC, 0x06, 0x06, 0xC6, 0x7C, 0x00,
    // '6' (54)
    0x7C, 0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0x7C, 0x00,
    // '7' (55)
    0xFE, 0x06, 0x06, 0x0C, 0x18, 0x18, 0x18, 0x00,
    // '8' (56)
    0x7C, 0xC6, 0xC6, 0x7C, 0xC6, 0xC6, 0x7C, 0x00,
    // '9' (57)
    0x7C, 0xC6, 0xC6, 0x7E, 0x06, 0x06, 0x7C, 0x00,
    // ':' (58)
    0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00,
    // ';' (59)
    0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x30,
    // '<' (60)
    0x0C, 0x18, 0x30, 0x60, 0x30, 0x18, 0x0C, 0x00,
    // '=' (61)
    0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00,
    // '>' (62)
    0x30, 0x18, 0x0C, 0x06, 0x0C, 0x18, 0x30, 0x00,
    // '?' (63)
    0x3C, 0x66, 0x0C, 0x18, 0x18, 0x00, 0x18, 0x00,
    // '@' (64)
    0x7C, 0xC6, 0xDE, 0xDE, 0xDE, 0xC0, 0x7E, 0x00,
    // 'A' (65)
    0x38, 0x6C, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0x00,
    // 'B' (66)
    0xFC, 0xC6, 0xC6, 0xFC, 0xC6, 0xC6, 0xFC, 0x00,
    // 'C' (67)
    0x7C, 0xC6, 0xC0, 0xC0, 0xC0, 0xC6, 0x7C, 0x00,
    // 'D' (68)
    0xF8, 0xCC, 0xC6, 0xC6, 0xC6, 0xCC, 0xF8, 0x00,
    // 'E' (69)
    0xFE, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xFE, 0x00,
    // 'F' (70)
    0xFE, 0xC0, 0xC0, 0xF8, 0xC0, 0xC0, 0xC0, 0x00,
    // 'G' (71)
    0x7C, 0xC6, 0xC0, 0xCE, 0xC6, 0xC6, 0x7C, 0x00,
    // 'H' (72)
    0xC6, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0xC6, 0x00,
    // 'I' (73)
    0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x7E, 0x00,
    // 'J' (74)
    0x06, 0x06, 0x06, 0x06, 0xC6, 0xC6, 0x7C, 0x00,
    // 'K' (75)
    0xC6, 0xCC, 0xD8, 0xF0, 0xD8, 0xCC, 0xC6, 0x00,
    // 'L' (76)
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xFE, 0x00,
    // 'M' (77)
    0xC6, 0xEE, 0xFE, 0xD6, 0xC6, 0xC6, 0xC6, 0x00,
    // 'N' (78)
    0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00,
    // 'O' (79)
    0x7C, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00,
    // 'P' (80)
    0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0, 0xC0, 0x00,
    // 'Q' (81)
    0x7C, 0xC6, 0xC6, 0xC6, 0xD6, 0xDE, 0x7C, 0x06,
    // 'R' (82)
    0xFC, 0xC6, 0xC6, 0xFC, 0xD8, 0xCC, 0xC6, 0x00,
    // 'S' (83)
    0x7C, 0xC6, 0xC0, 0x7C, 0x06, 0xC6, 0x7C, 0x00,
    // 'T' (84)
    0x7E, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00,
    // 'U' (85)
    0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0xC6, 0x7C, 0x00,
    // 'V' (86)
    0xC6, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x10, 0x00,
    // 'W' (87)
    0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00,
    // 'X' (88)
    0xC6, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0xC6, 0x00,
    // 'Y' (89)
    0x66, 0x66, 0x66, 0x3C, 0x18, 0x18, 0x18, 0x00,
    // 'Z' (90)
    0xFE, 0x06, 0x0C, 0x18, 0x30, 0x60, 0xFE, 0x00,
    // '[' (91)
    0x3C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x3C, 0x00,
    // '\\' (92)
    0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00,
    // ']' (93)
    0x3C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3C, 0x00,
    // '^' (94)
    0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00,
    // '_' (95)
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFE,
    // '`' (96)
    0x18, 0x18, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00,
    // 'a' (97)
    0x00, 0x00, 0x7C, 0x06, 0x7E, 0xC6, 0x7E, 0x00,
    // 'b' (98)
    0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xC6, 0xFC, 0x00,
    // 'c' (99)
    0x00, 0x00, 0x7C, 0xC6, 0xC0, 0xC6, 0x7C, 0x00,
    // 'd' (100)
    0x06, 0x06, 0x7E, 0xC6, 0xC6, 0xC6, 0x7E, 0x00,
    // 'e' (101)
    0x00, 0x00, 0x7C, 0xC6, 0xFE, 0xC0, 0x7C, 0x00,
    // 'f' (102)
    0x1C, 0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x00,
    // 'g' (103)
    0x00, 0x00, 0x7E, 0xC6, 0xC6, 0x7E, 0x06, 0x7C,
    // 'h' (104)
    0xC0, 0xC0, 0xFC, 0xC6, 0xC6, 0xC6, 0xC6, 0x00,
    // 'i' (105)
    0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x3C, 0x00,
    // 'j' (106)
    0x18, 0x00, 0x38, 0x18, 0x18, 0x18, 0x18, 0x70,
    // 'k' (107)
    0xC0, 0xC0, 0xC6, 0xCC, 0xF8, 0xCC, 0xC6, 0x00,
    // 'l' (108)
    0x38, 0x18, 0x18, 0x18, 0x18, 0x18, 0x3C, 0x00,
    // 'm' (109)
    0x00, 0x00, 0xEC, 0xFE, 0xD6, 0xC6, 0xC6, 0x00,
    // 'n' (110)
    0x00, 0x00, 0xFC, 0xC6, 0xC6, 0xC6, 0xC6, 0x00,
    // 'o' (111)
    0x00, 0x00, 0x7C, 0xC6, 0xC6, 0xC6, 0x7C, 0x00,
    // 'p' (112)
    0x00, 0x00, 0xFC, 0xC6, 0xC6, 0xFC, 0xC0, 0xC0,
    // 'q' (113)
    0x00, 0x00, 0x7E, 0xC6, 0xC6, 0x7E, 0x06, 0x06,
    // 'r' (114)
    0x00, 0x00, 0xDC, 0xE6, 0xC0, 0xC0, 0xC0, 0x00,
    // 's' (115)
    0x00, 0x00, 0x7E, 0xC0, 0x7C, 0x06, 0xFC, 0x00,
    // 't' (116)
    0x30, 0x30, 0x7C, 0x30, 0x30, 0x30, 0x1C, 0x00,
    // 'u' (117)
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0xC6, 0x7E, 0x00,
    // 'v' (118)
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00,
    // 'w' (119)
    0x00, 0x00, 0xC6, 0xC6, 0xD6, 0xFE, 0x6C, 0x00,
    // 'x' (120)
    0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00,
    // 'y' (121)
    0x00, 0x00, 0xC6, 0xC6, 0xC6, 0x7E, 0x06, 0x7C,
    // 'z' (122)
    0x00, 0x00, 0xFE, 0x0C, 0x38, 0x60, 0xFE, 0x00,
    // '{' (123)
    0x0E, 0x18, 0x18, 0x70, 0x18, 0x18, 0x0E, 0x00,
    // '|' (124)
    0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x00,
    // '}' (125)
    0x70, 0x18, 0x18, 0x0E, 0x18, 0x18, 0x70, 0x00,
    // '~' (126)
    0x72, 0x9C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];
