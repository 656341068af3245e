//! Width capping.

use image::imageops::{self, FilterType};
use image::RgbImage;

pub struct ImageResize;

impl ImageResize {
    /// Downscale to the width ceiling, preserving aspect ratio.
    ///
    /// Images at or under the ceiling pass through untouched; the height is
    /// never independently capped. Resampling uses Lanczos3.
    pub fn downscale_to_width(img: RgbImage, max_width: u32) -> RgbImage {
        let (width, height) = img.dimensions();
        if width <= max_width {
            return img;
        }

        let scale = max_width as f64 / width as f64;
        // max(1): a pixel-high strip must not round down to an empty image
        let new_height = (height as f64 * scale).round().max(1.0) as u32;

        imageops::resize(&img, max_width, new_height, FilterType::Lanczos3)
    }
}
