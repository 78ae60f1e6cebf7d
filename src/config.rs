// src/config.rs

//! Defines the configuration structures for display setup.
//!
//! This module provides a set of structs that can be deserialized from a
//! configuration file to choose the buffer dimensions, the initial
//! background color, and the font-size profile (the layout offsets and
//! waveform scale that retune rendering when the host switches between
//! small, big, and huge fonts).
//!
//! Default values are provided for every field, so a partial configuration
//! file is always valid.

// Serde is used for deserializing the configuration from a file.
// The `Serialize` trait is also derived for convenience, allowing the current
// configuration to be exported if needed.
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::color::Rgb;

/// Represents the complete configuration for one display buffer.
///
/// This struct is the root of the configuration and is intended to be
/// deserialized from a JSON file via [`DisplayConfig::load`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct DisplayConfig {
    /// Buffer width in pixels.
    pub width: u16,
    /// Buffer height in pixels.
    pub height: u16,
    /// Color the buffer is cleared to when built from this config.
    pub background: Rgb,
    /// Layout offsets and waveform scale for the active font size.
    pub profile: FontProfile,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            width: 480,
            height: 270,
            background: Rgb::BLACK,
            profile: FontProfile::default(),
        }
    }
}

impl DisplayConfig {
    /// Loads a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read display config from {}", path.display()))?;
        let config = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse display config from {}", path.display()))?;
        Ok(config)
    }

    /// Writes the configuration to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(self).context("Failed to serialize display config")?;
        fs::write(path, text)
            .with_context(|| format!("Failed to write display config to {}", path.display()))?;
        Ok(())
    }
}

/// Layout offsets and waveform scale for one font size.
///
/// These are the externally-mutated knobs read by the glyph and waveform
/// routines. Hosts either apply one of the presets when the user switches
/// font size, or ship free-form values in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontProfile {
    /// Horizontal pixel adjustment applied to glyph destinations.
    pub x_offset: i16,
    /// Vertical pixel adjustment applied to glyph destinations.
    pub y_offset: i16,
    /// Extra vertical adjustment for glyphs only, on top of `y_offset`.
    pub font_y_offset: i16,
    /// Plot height of the waveform view, in pixels.
    pub waveform_max: u8,
}

impl Default for FontProfile {
    fn default() -> Self {
        FontProfile::small()
    }
}

impl FontProfile {
    /// Preset for the small (8px) font.
    pub const fn small() -> Self {
        FontProfile {
            x_offset: 0,
            y_offset: 0,
            font_y_offset: 0,
            waveform_max: 16,
        }
    }

    /// Preset for the big (16px) font.
    pub const fn big() -> Self {
        FontProfile {
            x_offset: 0,
            y_offset: -1,
            font_y_offset: 2,
            waveform_max: 32,
        }
    }

    /// Preset for the huge (24px) font.
    pub const fn huge() -> Self {
        FontProfile {
            x_offset: -1,
            y_offset: -2,
            font_y_offset: 3,
            waveform_max: 48,
        }
    }
}
