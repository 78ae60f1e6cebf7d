// src/buffer/waveform.rs

//! Waveform plotting.
//!
//! Renders a range of raw byte samples as a vertically-scaled line plot.
//! Consecutive samples are joined with a vertical segment (oscilloscope
//! style), so steep signals stay visible at one pixel per sample.

use log::trace;

use super::DisplayBuffer;
use crate::color::Rgb;

impl DisplayBuffer {
    /// Plots `samples[start..end)` anchored at `(x, y)`.
    ///
    /// Sample values scale into `[0, waveform_max]` pixels; a louder sample
    /// rises toward the anchor row, so the plot occupies the band
    /// `[y, y + waveform_max]`. Sample index `start + i` lands at column
    /// `x + i`. An empty or inverted range (`start >= end`) draws nothing;
    /// the range is clamped to the sample slice; out-of-bounds pixels are
    /// dropped by the pixel writer.
    pub fn draw_waveform(
        &mut self,
        x: u16,
        y: u16,
        color: Rgb,
        samples: &[u8],
        start: u16,
        end: u16,
    ) {
        if start >= end {
            return;
        }
        let start = start as usize;
        let end = (end as usize).min(samples.len());
        if start >= end {
            return;
        }
        trace!(
            "draw_waveform: {} samples at ({}, {}) scale {}",
            end - start,
            x,
            y,
            self.waveform_max
        );

        let scale = self.waveform_max as i32;
        let mut prev_y: Option<i32> = None;
        for (i, &value) in samples[start..end].iter().enumerate() {
            let rise = value as i32 * scale / 255;
            let px = x as i32 + i as i32;
            let py = y as i32 + scale - rise;
            match prev_y {
                // First sample in range plots as a single pixel.
                None => self.set_pixel_signed(px, py, color),
                // Join to the previous sample with a vertical segment.
                Some(prev) => {
                    let (top, bottom) = if prev <= py { (prev, py) } else { (py, prev) };
                    for line_y in top..=bottom {
                        self.set_pixel_signed(px, line_y, color);
                    }
                }
            }
            prev_y = Some(py);
        }
    }
}
