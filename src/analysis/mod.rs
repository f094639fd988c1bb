//! Analysis modules for palette extraction and tonal statistics

/// Decoded pixel buffer representation
pub mod grid;
/// Brightness and saturation averages
pub mod metrics;
/// Dominant color extraction
pub mod palette;

use crate::io::configuration::{
    FALLBACK_BRIGHTNESS, FALLBACK_DOMINANT_COLORS, FALLBACK_SATURATION,
};
use std::path::Path;

pub use grid::PixelGrid;

/// Summary statistics derived from a single image
///
/// Immutable result record: at most 3 dominant colors ordered
/// most-frequent first, brightness and saturation each in [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct ColorAnalysis {
    /// Hex-encoded dominant colors, most frequent first
    pub dominant_colors: Vec<String>,
    /// Average perceptual luminance in [0, 1]
    pub brightness: f64,
    /// Average HSV saturation in [0, 1]
    pub saturation: f64,
}

impl ColorAnalysis {
    /// Substitute analysis returned when image decoding fails
    ///
    /// A warm neutral palette with mid-range tone values.
    pub fn fallback() -> Self {
        Self {
            dominant_colors: FALLBACK_DOMINANT_COLORS
                .iter()
                .map(|&hex| hex.to_string())
                .collect(),
            brightness: FALLBACK_BRIGHTNESS,
            saturation: FALLBACK_SATURATION,
        }
    }
}

/// Analyze a decoded pixel buffer
pub fn analyze(grid: &PixelGrid) -> ColorAnalysis {
    ColorAnalysis {
        dominant_colors: palette::dominant_colors(grid),
        brightness: metrics::brightness(grid),
        saturation: metrics::saturation(grid),
    }
}

/// Analyze an image file, degrading to the fallback analysis on failure
///
/// Decode failures (missing file, unsupported or corrupt data) substitute
/// the documented fallback analysis instead of propagating an error.
pub fn analyze_source<P: AsRef<Path>>(path: P) -> ColorAnalysis {
    crate::io::image::load_pixel_grid(path)
        .map_or_else(|_| ColorAnalysis::fallback(), |grid| analyze(&grid))
}
