//! Decoded pixel buffer representation

use image::RgbaImage;
use ndarray::Array3;

/// Owned RGBA pixel buffer in row-major order
///
/// Stored as an H×W×4 array of 8-bit channel values. The buffer is
/// read-only input for analysis; nothing in the engine mutates it after
/// construction.
#[derive(Clone, Debug)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// Build a grid from a decoded RGBA image
    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let mut data = Array3::zeros((height, width, 4));

        for (x, y, pixel) in image.enumerate_pixels() {
            let channels = pixel.0;
            for c in 0..4 {
                let value = channels.get(c).copied().unwrap_or(0);
                if let Some(slot) = data.get_mut((y as usize, x as usize, c)) {
                    *slot = value;
                }
            }
        }

        Self { data }
    }

    /// Build a grid of the given dimensions filled with a single RGBA value
    pub fn filled(height: usize, width: usize, rgba: [u8; 4]) -> Self {
        let data = Array3::from_shape_fn((height, width, 4), |(_, _, c)| {
            rgba.get(c).copied().unwrap_or(0)
        });
        Self { data }
    }

    /// Grid height in pixels
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Grid width in pixels
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    /// Total number of pixels
    pub fn pixel_count(&self) -> usize {
        self.height() * self.width()
    }

    /// RGBA value at the given row and column, if in bounds
    pub fn pixel(&self, row: usize, col: usize) -> Option<[u8; 4]> {
        let r = self.data.get((row, col, 0)).copied()?;
        let g = self.data.get((row, col, 1)).copied()?;
        let b = self.data.get((row, col, 2)).copied()?;
        let a = self.data.get((row, col, 3)).copied()?;
        Some([r, g, b, a])
    }

    /// Set the RGBA value at the given row and column
    ///
    /// Out-of-bounds positions are ignored. Intended for constructing
    /// synthetic buffers; analysis never writes through this.
    pub fn set_pixel(&mut self, row: usize, col: usize, rgba: [u8; 4]) {
        for (c, &value) in rgba.iter().enumerate() {
            if let Some(slot) = self.data.get_mut((row, col, c)) {
                *slot = value;
            }
        }
    }

    /// Iterate pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        let width = self.width();
        (0..self.pixel_count()).filter_map(move |index| {
            let row = index / width.max(1);
            let col = index % width.max(1);
            self.pixel(row, col)
        })
    }
}
