//! Per-channel color computations shared by the image analyzer
//!
//! All functions operate on 8-bit RGB channel values and produce values
//! normalized to [0, 1], matching the conventions of the analysis pipeline.

/// ITU-R BT.601 luma coefficient for the red channel
const LUMA_RED: f64 = 0.299;
/// ITU-R BT.601 luma coefficient for the green channel
const LUMA_GREEN: f64 = 0.587;
/// ITU-R BT.601 luma coefficient for the blue channel
const LUMA_BLUE: f64 = 0.114;

/// Encode an RGB triple as a lowercase `#rrggbb` hex string
pub fn hex_code(rgb: [u8; 3]) -> String {
    let [r, g, b] = rgb;
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Perceptual luminance of an RGB triple, normalized to [0, 1]
///
/// Uses the BT.601 weighting `0.299·R + 0.587·G + 0.114·B`
pub fn luminance(rgb: [u8; 3]) -> f64 {
    let [r, g, b] = rgb;
    LUMA_RED
        .mul_add(f64::from(r), LUMA_GREEN.mul_add(f64::from(g), LUMA_BLUE * f64::from(b)))
        / 255.0
}

/// HSV saturation of an RGB triple, in [0, 1]
///
/// Computed as `(max - min) / max` over normalized channels; defined as 0
/// for pure black where the maximum channel is 0
pub fn hsv_saturation(rgb: [u8; 3]) -> f64 {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    if max == 0 {
        return 0.0;
    }
    let min = r.min(g).min(b);
    f64::from(max - min) / f64::from(max)
}
