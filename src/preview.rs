//! Grayscale heightmap rendering of a deformed surface.

use image::{GrayImage, Luma};

use crate::surface::SurfaceGrid;

/// Render vertex heights to a grayscale image, one pixel per vertex
///
/// Heights are mapped linearly from `range` onto 0..=255 and clamped. Row 0 is
/// the grid's first z row.
pub fn render_heightmap(grid: &SurfaceGrid, range: (f32, f32)) -> GrayImage {
    let size = grid.resolution() as u32;
    let (lo, hi) = range;
    let span = hi - lo;

    let mut img = GrayImage::new(size, size);
    for (idx, h) in grid.heights().into_iter().enumerate() {
        let x = idx as u32 % size;
        let y = idx as u32 / size;

        let norm = if span > 0.0 { (h - lo) / span } else { 0.5 };
        // NaN heights render black
        let gray = (norm * 255.0).clamp(0.0, 255.0) as u8;

        img.put_pixel(x, y, Luma([gray]));
    }
    img
}
