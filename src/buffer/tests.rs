// src/buffer/tests.rs

use crate::buffer::{DisplayBuffer, RectOptions};
use crate::color::Rgb;
use crate::config::{DisplayConfig, FontProfile};
use crate::font::FontSheet;
use test_log::test;

/// Reads back one RGBA pixel.
fn pixel(buffer: &DisplayBuffer, x: u16, y: u16) -> [u8; 4] {
    let offset = (x as usize + y as usize * buffer.width() as usize) * 4;
    let bytes = buffer.as_bytes();
    [bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]]
}

/// A 16x8 sheet, so every glyph cell is a single pixel. The top grid row
/// (codes 0x00..=0x0F) has its bit set; all other cells are clear.
fn one_pixel_cell_sheet() -> FontSheet {
    let mut rows = vec![0u8; 2 * 8];
    rows[0] = 0xFF;
    rows[1] = 0xFF;
    FontSheet::from_packed(16, 8, rows).unwrap()
}

#[test]
fn set_pixel_writes_opaque_rgba() {
    // Contract: a pixel write stores (r, g, b, 255) at the row-major offset.
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.set_pixel(1, 2, Rgb::new(10, 20, 30));
    assert_eq!(pixel(&buffer, 1, 2), [10, 20, 30, 255]);
    // Untouched pixels keep their zeroed (transparent) state.
    assert_eq!(pixel(&buffer, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn out_of_bounds_pixel_writes_are_dropped() {
    // Contract: x >= width or y >= height is a silent no-op, not an error.
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.set_pixel(4, 0, Rgb::WHITE);
    buffer.set_pixel(0, 4, Rgb::WHITE);
    buffer.set_pixel(u16::MAX, u16::MAX, Rgb::WHITE);
    assert!(buffer.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn rect_fill_covers_exact_area() {
    // Contract: draw_rect paints [x, x+w) x [y, y+h) and nothing else.
    let mut buffer = DisplayBuffer::new(8, 8);
    buffer.clear(Rgb::BLACK);
    buffer.draw_rect(2, 3, RectOptions::new(3, 2, Rgb::new(10, 20, 30)));

    for y in 0..8 {
        for x in 0..8 {
            let inside = (2..5).contains(&x) && (3..5).contains(&y);
            let expected = if inside {
                [10, 20, 30, 255]
            } else {
                [0, 0, 0, 255]
            };
            assert_eq!(pixel(&buffer, x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn rect_clips_to_buffer_edges() {
    let mut buffer = DisplayBuffer::new(8, 8);
    buffer.clear(Rgb::BLACK);
    // Hangs off the bottom-right corner; the in-bounds part still paints.
    buffer.draw_rect(6, 6, RectOptions::new(4, 4, Rgb::RED));
    assert_eq!(pixel(&buffer, 6, 6), Rgb::RED.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 7, 7), Rgb::RED.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 5, 5), [0, 0, 0, 255]);

    // Fully out of bounds: in-bounds pixels are untouched.
    let before = buffer.as_bytes().to_vec();
    buffer.draw_rect(8, 8, RectOptions::new(4, 4, Rgb::WHITE));
    assert_eq!(buffer.as_bytes(), &before[..]);
    // The color is still cached even though nothing landed.
    assert_eq!(buffer.last_color(), Rgb::WHITE);
}

#[test]
fn zero_area_rect_writes_nothing() {
    // Contract: w == 0 or h == 0 is an empty iteration range, not an error.
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.clear(Rgb::BLACK);
    let before = buffer.as_bytes().to_vec();
    buffer.draw_rect(1, 1, RectOptions::new(0, 3, Rgb::RED));
    buffer.draw_rect(1, 1, RectOptions::new(3, 0, Rgb::RED));
    assert_eq!(buffer.as_bytes(), &before[..]);
}

#[test]
fn last_color_updates_on_every_rect_call() {
    // Contract: every rect form caches the color actually used; clear also
    // caches the background, which other rect calls leave alone.
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.clear(Rgb::new(1, 2, 3));
    assert_eq!(buffer.last_color(), Rgb::new(1, 2, 3));
    assert_eq!(buffer.background(), Rgb::new(1, 2, 3));

    buffer.draw_rect(0, 0, RectOptions::colored(Rgb::new(9, 9, 9)));
    assert_eq!(buffer.last_color(), Rgb::new(9, 9, 9));
    assert_eq!(buffer.background(), Rgb::new(1, 2, 3));
}

#[test]
fn color_omitting_rect_reuses_cached_color() {
    // Contract: draw_rect(x, y, w, h) with no color paints with the color
    // of the previous call.
    let mut buffer = DisplayBuffer::new(8, 8);
    buffer.draw_rect(0, 0, RectOptions::new(1, 1, Rgb::new(10, 20, 30)));
    buffer.draw_rect(4, 4, RectOptions::sized(2, 2));
    assert_eq!(pixel(&buffer, 4, 4), [10, 20, 30, 255]);
    assert_eq!(pixel(&buffer, 5, 5), [10, 20, 30, 255]);
}

#[test]
fn default_options_draw_one_pixel_in_cached_color() {
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.draw_rect(0, 0, RectOptions::colored(Rgb::CYAN));
    buffer.draw_rect(2, 2, RectOptions::default());
    assert_eq!(pixel(&buffer, 2, 2), Rgb::CYAN.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 3, 2), [0, 0, 0, 0]);
    assert_eq!(pixel(&buffer, 2, 3), [0, 0, 0, 0]);
}

#[test]
fn clear_then_rect_scenario() {
    // The 4x4 scenario: clear to black, then a 2x2 red block at (1, 1).
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.clear(Rgb::new(0, 0, 0));
    buffer.draw_rect(1, 1, RectOptions::new(2, 2, Rgb::new(255, 0, 0)));

    for y in 0..4 {
        for x in 0..4 {
            let inside = (1..3).contains(&x) && (1..3).contains(&y);
            let expected = if inside {
                [255, 0, 0, 255]
            } else {
                [0, 0, 0, 255]
            };
            assert_eq!(pixel(&buffer, x, y), expected, "pixel ({}, {})", x, y);
        }
    }
    assert_eq!(buffer.background(), Rgb::new(0, 0, 0));
    assert_eq!(buffer.last_color(), Rgb::new(255, 0, 0));
}

#[test]
fn char_draw_without_font_is_noop() {
    // Contract: glyph operations must not crash or write without a font.
    let mut buffer = DisplayBuffer::new(8, 8);
    buffer.clear(Rgb::BLUE);
    let before = buffer.as_bytes().to_vec();
    buffer.draw_char(b'A', 0, 0, Rgb::WHITE, Rgb::BLACK);
    buffer.draw_text("hello", 0, 0, Rgb::WHITE, Rgb::BLACK);
    assert_eq!(buffer.as_bytes(), &before[..]);
}

#[test]
fn char_blit_writes_fg_on_set_bits_and_bg_elsewhere() {
    let mut buffer = DisplayBuffer::new(16, 16);
    buffer.clear(Rgb::BLUE);
    buffer.attach_font(Some(FontSheet::builtin()));
    buffer.draw_char(b'A', 0, 0, Rgb::WHITE, Rgb::BLACK);

    // First row of 'A' is 0x38: bits 2..=4 are set.
    assert_eq!(pixel(&buffer, 2, 0), Rgb::WHITE.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 3, 0), Rgb::WHITE.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 0, 0), Rgb::BLACK.to_rgba_bytes());
    // The whole 8x8 cell is repainted; its last row is blank in the font.
    assert_eq!(pixel(&buffer, 7, 7), Rgb::BLACK.to_rgba_bytes());
    // Pixels outside the cell keep the clear color.
    assert_eq!(pixel(&buffer, 8, 0), Rgb::BLUE.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 0, 8), Rgb::BLUE.to_rgba_bytes());
}

#[test]
fn char_destination_honors_offsets() {
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.clear(Rgb::BLACK);
    buffer.attach_font(Some(one_pixel_cell_sheet()));
    buffer.x_offset = 1;
    buffer.y_offset = 1;
    buffer.font_y_offset = 1;

    // Code 0x00 is a set bit in the sheet, so it lands as fg at (1, 2).
    buffer.draw_char(0x00, 0, 0, Rgb::RED, Rgb::BLACK);
    assert_eq!(pixel(&buffer, 1, 2), Rgb::RED.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 0, 0), Rgb::BLACK.to_rgba_bytes());
}

#[test]
fn char_with_negative_offset_is_clipped() {
    // Contract: offsets can push a glyph off the top-left edge; those
    // pixels are dropped, not wrapped.
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.clear(Rgb::BLACK);
    buffer.attach_font(Some(one_pixel_cell_sheet()));
    buffer.x_offset = -1;

    let before = buffer.as_bytes().to_vec();
    buffer.draw_char(0x00, 0, 0, Rgb::RED, Rgb::RED);
    assert_eq!(buffer.as_bytes(), &before[..]);
}

#[test]
fn char_cell_uses_grid_position() {
    // Codes in the top grid row of the sheet are set bits; codes below are
    // clear, so they blit as bg.
    let mut buffer = DisplayBuffer::new(4, 4);
    buffer.clear(Rgb::BLACK);
    buffer.attach_font(Some(one_pixel_cell_sheet()));

    buffer.draw_char(0x05, 1, 1, Rgb::RED, Rgb::GREEN);
    assert_eq!(pixel(&buffer, 1, 1), Rgb::RED.to_rgba_bytes());
    buffer.draw_char(0x15, 2, 2, Rgb::RED, Rgb::GREEN);
    assert_eq!(pixel(&buffer, 2, 2), Rgb::GREEN.to_rgba_bytes());
}

#[test]
fn attach_font_recomputes_metrics_eagerly() {
    let mut buffer = DisplayBuffer::new(8, 8);
    assert_eq!(buffer.font_metrics(), None);

    buffer.attach_font(Some(FontSheet::builtin()));
    assert_eq!(buffer.font_metrics(), Some((8, 8)));

    buffer.attach_font(Some(one_pixel_cell_sheet()));
    assert_eq!(buffer.font_metrics(), Some((1, 1)));

    buffer.attach_font(None);
    assert_eq!(buffer.font_metrics(), None);
}

#[test]
fn draw_text_advances_one_cell_per_char() {
    let mut buffer = DisplayBuffer::new(32, 8);
    buffer.clear(Rgb::BLUE);
    buffer.attach_font(Some(FontSheet::builtin()));
    buffer.draw_text("AB", 0, 0, Rgb::WHITE, Rgb::BLACK);

    // 'A' cell at x 0..8, 'B' cell at x 8..16.
    assert_eq!(pixel(&buffer, 2, 0), Rgb::WHITE.to_rgba_bytes());
    // First row of 'B' is 0xFC: bit 0 set.
    assert_eq!(pixel(&buffer, 8, 0), Rgb::WHITE.to_rgba_bytes());
    // Beyond the second cell the clear color survives.
    assert_eq!(pixel(&buffer, 16, 0), Rgb::BLUE.to_rgba_bytes());
}

#[test]
fn draw_text_skips_non_ascii_but_keeps_alignment() {
    let mut buffer = DisplayBuffer::new(32, 8);
    buffer.clear(Rgb::BLUE);
    buffer.attach_font(Some(FontSheet::builtin()));
    buffer.draw_text("\u{e9}A", 0, 0, Rgb::WHITE, Rgb::BLACK);

    // The non-ASCII cell is untouched; 'A' still lands in the second cell.
    assert_eq!(pixel(&buffer, 0, 0), Rgb::BLUE.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 10, 0), Rgb::WHITE.to_rgba_bytes());
}

#[test]
fn waveform_empty_and_inverted_ranges_draw_nothing() {
    // Contract: start >= end draws nothing; a range past the data is
    // clamped away.
    let mut buffer = DisplayBuffer::new(8, 8);
    buffer.clear(Rgb::BLACK);
    buffer.waveform_max = 4;
    let before = buffer.as_bytes().to_vec();

    let samples = [0u8, 128, 255];
    buffer.draw_waveform(0, 0, Rgb::GREEN, &samples, 2, 2);
    buffer.draw_waveform(0, 0, Rgb::GREEN, &samples, 3, 1);
    buffer.draw_waveform(0, 0, Rgb::GREEN, &samples, 5, 9);
    assert_eq!(buffer.as_bytes(), &before[..]);
}

#[test]
fn waveform_scales_and_connects_samples() {
    let mut buffer = DisplayBuffer::new(8, 8);
    buffer.clear(Rgb::BLACK);
    buffer.waveform_max = 4;

    // Sample 0 sits at the bottom of the band, sample 255 at the top; the
    // second column carries the joining segment.
    let samples = [0u8, 255];
    buffer.draw_waveform(0, 0, Rgb::GREEN, &samples, 0, 2);

    assert_eq!(pixel(&buffer, 0, 4), Rgb::GREEN.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 0, 3), Rgb::BLACK.to_rgba_bytes());
    for y in 0..=4 {
        assert_eq!(pixel(&buffer, 1, y), Rgb::GREEN.to_rgba_bytes(), "segment y {}", y);
    }
    assert_eq!(pixel(&buffer, 2, 0), Rgb::BLACK.to_rgba_bytes());
}

#[test]
fn waveform_range_maps_to_columns_from_anchor() {
    let mut buffer = DisplayBuffer::new(8, 8);
    buffer.clear(Rgb::BLACK);
    buffer.waveform_max = 2;

    // Only indices 1 and 2 are visited; they land at columns 3 and 4.
    let samples = [255u8, 0, 0, 255];
    buffer.draw_waveform(3, 1, Rgb::CYAN, &samples, 1, 3);

    assert_eq!(pixel(&buffer, 3, 3), Rgb::CYAN.to_rgba_bytes());
    assert_eq!(pixel(&buffer, 4, 3), Rgb::CYAN.to_rgba_bytes());
    // Column for index 0 was never visited.
    for y in 0..8 {
        assert_eq!(pixel(&buffer, 2, y), Rgb::BLACK.to_rgba_bytes());
    }
}

#[test]
fn waveform_zero_scale_plots_flat_line() {
    let mut buffer = DisplayBuffer::new(8, 8);
    buffer.clear(Rgb::BLACK);
    // waveform_max stays 0.
    let samples = [0u8, 100, 255];
    buffer.draw_waveform(1, 2, Rgb::RED, &samples, 0, 3);
    for x in 1..4 {
        assert_eq!(pixel(&buffer, x, 2), Rgb::RED.to_rgba_bytes());
    }
    assert_eq!(pixel(&buffer, 1, 3), Rgb::BLACK.to_rgba_bytes());
}

#[test]
fn host_can_write_bytes_directly() {
    // The mutable byte view is the host's escape hatch; a direct write is
    // visible to readback like any drawn pixel.
    let mut buffer = DisplayBuffer::new(2, 2);
    buffer.as_bytes_mut()[0..4].copy_from_slice(&[7, 8, 9, 255]);
    assert_eq!(pixel(&buffer, 0, 0), [7, 8, 9, 255]);
}

#[test]
fn from_config_applies_profile_and_background() {
    let config = DisplayConfig {
        width: 6,
        height: 4,
        background: Rgb::new(3, 4, 5),
        profile: FontProfile::huge(),
    };
    let buffer = DisplayBuffer::from_config(&config);

    assert_eq!((buffer.width(), buffer.height()), (6, 4));
    assert_eq!(buffer.background(), Rgb::new(3, 4, 5));
    assert_eq!(buffer.x_offset, FontProfile::huge().x_offset);
    assert_eq!(buffer.waveform_max, FontProfile::huge().waveform_max);
    for y in 0..4 {
        for x in 0..6 {
            assert_eq!(pixel(&buffer, x, y), [3, 4, 5, 255]);
        }
    }
}
