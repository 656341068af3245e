//! Color-mode normalization.
//!
//! Persisted images carry no alpha channel and no palette; everything is
//! flattened to 8-bit RGB before encoding.

use image::{DynamicImage, Rgb, RgbImage};

pub struct ColorNormalizer;

impl ColorNormalizer {
    /// Flatten any decoded color mode to 8-bit RGB.
    ///
    /// Alpha-bearing modes are composited over a black background (each
    /// channel scaled by its alpha). Grayscale and high-bit-depth modes
    /// convert through the standard RGB8 path.
    pub fn flatten(img: DynamicImage) -> RgbImage {
        if !img.color().has_alpha() {
            return img.to_rgb8();
        }

        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        let mut rgb = RgbImage::new(width, height);

        for (x, y, pixel) in rgba.enumerate_pixels() {
            let alpha = pixel[3] as u16;
            rgb.put_pixel(
                x,
                y,
                Rgb([
                    ((pixel[0] as u16 * alpha) / 255) as u8,
                    ((pixel[1] as u16 * alpha) / 255) as u8,
                    ((pixel[2] as u16 * alpha) / 255) as u8,
                ]),
            );
        }

        rgb
    }
}
