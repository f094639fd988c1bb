//! Image decoding into analyzer pixel buffers

use crate::analysis::grid::PixelGrid;
use crate::io::error::StyleError;
use std::path::Path;

/// File extensions accepted for batch analysis
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

/// Load and decode an image file into a pixel buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image in a supported format
pub fn load_pixel_grid<P: AsRef<Path>>(path: P) -> crate::io::error::Result<PixelGrid> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| StyleError::ImageDecode {
        path: path_buf,
        source: e,
    })?;
    let rgba_img = img.to_rgba8();

    Ok(PixelGrid::from_rgba_image(&rgba_img))
}

/// Test whether a path carries a supported image extension
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
        })
}
