//! Fixed-format JPEG encoding.

use anyhow::Result;
use bytes::Bytes;
use image::RgbImage;

pub struct JpegEncoder;

impl JpegEncoder {
    /// Encode an RGB8 buffer as progressive JPEG at the given quality.
    pub fn encode(img: &RgbImage, quality: u8) -> Result<Bytes> {
        let (width, height) = img.dimensions();

        let mut comp = mozjpeg::Compress::new(mozjpeg::ColorSpace::JCS_RGB);
        comp.set_size(width as usize, height as usize);
        comp.set_quality(quality as f32);
        comp.set_progressive_mode();
        comp.set_optimize_coding(true);

        let mut comp = comp.start_compress(Vec::new())?;
        comp.write_scanlines(img)?;
        let jpeg_data = comp.finish()?;

        Ok(Bytes::from(jpeg_data))
    }
}
