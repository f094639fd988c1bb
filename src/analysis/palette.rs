//! Dominant color extraction via strided frequency bucketing

use crate::analysis::grid::PixelGrid;
use crate::io::configuration::{COLOR_SAMPLE_STRIDE, MAX_DOMINANT_COLORS};
use crate::math::color::hex_code;
use indexmap::IndexMap;

/// Extract the most frequent colors from a pixel buffer
///
/// Samples 1 of every [`COLOR_SAMPLE_STRIDE`] pixels in row-major order and
/// buckets by exact RGB value (alpha ignored). Returns up to
/// [`MAX_DOMINANT_COLORS`] hex strings ordered most-frequent first; equal
/// counts keep first-encountered order, which the insertion-ordered bucket
/// map preserves through the stable sort.
pub fn dominant_colors(grid: &PixelGrid) -> Vec<String> {
    let mut buckets: IndexMap<[u8; 3], usize> = IndexMap::new();

    for [r, g, b, _] in grid.pixels().step_by(COLOR_SAMPLE_STRIDE) {
        *buckets.entry([r, g, b]).or_insert(0) += 1;
    }

    let mut ranked: Vec<([u8; 3], usize)> = buckets.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_DOMINANT_COLORS)
        .map(|(rgb, _)| hex_code(rgb))
        .collect()
}
