//! Image processing module
//!
//! This module provides the normalization steps applied to every upload:
//! - Color-mode flattening to 8-bit RGB (normalize)
//! - Width capping with high-quality resampling (resize)
//! - Fixed-quality JPEG encoding (encode)
//! - The composed decode→flatten→downscale→encode pass (renderer)

pub mod encode;
pub mod normalize;
pub mod renderer;
pub mod resize;

pub use encode::JpegEncoder;
pub use normalize::ColorNormalizer;
pub use renderer::{ImageRenderer, RenderedImage};
pub use resize::ImageResize;
