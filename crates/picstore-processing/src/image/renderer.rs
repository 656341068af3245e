//! The composed render pass: decode → flatten → downscale → encode.

use anyhow::Result;
use bytes::Bytes;
use std::io::Cursor;

use crate::image::encode::JpegEncoder;
use crate::image::normalize::ColorNormalizer;
use crate::image::resize::ImageResize;

/// Output of a render pass: encoded bytes plus final pixel dimensions.
#[derive(Clone, Debug)]
pub struct RenderedImage {
    pub data: Bytes,
    pub width: u32,
    pub height: u32,
}

pub struct ImageRenderer;

impl ImageRenderer {
    /// Decode raw upload bytes and produce the normalized JPEG rendition.
    ///
    /// CPU-bound; callers on the async pool should wrap this in
    /// `tokio::task::spawn_blocking`.
    pub fn render(data: &[u8], max_width: u32, quality: u8) -> Result<RenderedImage> {
        let cursor = Cursor::new(data);
        let img = image::ImageReader::new(cursor)
            .with_guessed_format()?
            .decode()?;

        let rgb = ColorNormalizer::flatten(img);
        let resized = ImageResize::downscale_to_width(rgb, max_width);
        let (width, height) = resized.dimensions();
        let encoded = JpegEncoder::encode(&resized, quality)?;

        Ok(RenderedImage {
            data: encoded,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        img.write_to(&mut cursor, ImageFormat::Png).unwrap();
        buffer
    }

    #[test]
    fn test_render_small_image_keeps_dimensions() {
        let data = png_bytes(100, 50);

        let rendered = ImageRenderer::render(&data, 800, 85).unwrap();
        assert_eq!((rendered.width, rendered.height), (100, 50));

        let decoded = image::load_from_memory(&rendered.data).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 50));
        assert!(!decoded.color().has_alpha());
    }

    #[test]
    fn test_render_wide_image_downscales() {
        let data = png_bytes(1600, 1200);

        let rendered = ImageRenderer::render(&data, 800, 85).unwrap();
        assert_eq!((rendered.width, rendered.height), (800, 600));
    }

    #[test]
    fn test_render_output_is_jpeg() {
        let data = png_bytes(20, 20);

        let rendered = ImageRenderer::render(&data, 800, 85).unwrap();
        let format = image::guess_format(&rendered.data).unwrap();
        assert_eq!(format, ImageFormat::Jpeg);
    }

    #[test]
    fn test_render_rejects_garbage() {
        let result = ImageRenderer::render(b"definitely not an image", 800, 85);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_rejects_truncated_png() {
        let mut data = png_bytes(64, 64);
        data.truncate(data.len() / 2);

        let result = ImageRenderer::render(&data, 800, 85);
        assert!(result.is_err());
    }

    #[test]
    fn test_render_decodes_gif_first_frame() {
        let img = image::RgbImage::from_pixel(30, 10, image::Rgb([0, 128, 255]));
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut cursor, ImageFormat::Gif)
            .unwrap();

        let rendered = ImageRenderer::render(&buffer, 800, 85).unwrap();
        assert_eq!((rendered.width, rendered.height), (30, 10));
    }
}
