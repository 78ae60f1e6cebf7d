// src/lib.rs

//! A software framebuffer for a pixel-addressable display.
//!
//! The crate centers on [`DisplayBuffer`]: an owned RGBA byte array with
//! drawing primitives for filled rectangles, bitmap-font glyphs, and
//! waveform plots, plus a small amount of cached drawing state (last
//! rectangle color, background color, font metrics, layout offsets). The
//! host constructs the buffer, draws into it, and uploads the bytes to a
//! texture itself; this crate performs no display I/O.
//!
//! Drawing never fails: out-of-bounds writes, zero-area rectangles, glyph
//! calls without an attached font, and empty waveform ranges are all
//! silent no-ops. Errors only surface at the construction boundary, where
//! host-supplied font data and configuration files are validated.
//!
//! ```
//! use display_buffer::{DisplayBuffer, FontSheet, RectOptions, Rgb};
//!
//! let mut display = DisplayBuffer::new(128, 64);
//! display.clear(Rgb::BLACK);
//! display.attach_font(Some(FontSheet::builtin()));
//! display.draw_text("READY", 4, 4, Rgb::GREEN, Rgb::BLACK);
//! display.draw_rect(4, 16, RectOptions::new(40, 8, Rgb::RED));
//! // display.as_bytes() is now ready for texture upload.
//! assert_eq!(display.as_bytes().len(), 128 * 64 * 4);
//! ```

pub mod buffer;
pub mod color;
pub mod config;
pub mod font;

pub use buffer::{DisplayBuffer, RectOptions};
pub use color::Rgb;
pub use config::{DisplayConfig, FontProfile};
pub use font::FontSheet;
