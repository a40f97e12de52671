//! Raster decoding, resizing and encoding for thumbnails.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::{Error, Result};

/// A decoded raster image with RGBA8 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Row-major RGBA8 pixel data
    pub pixels: Vec<u8>,
}

impl DecodedImage {
    /// Create a decoded image from raw RGBA8 pixels.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    fn to_buffer(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or_else(|| {
            Error::Thumbnail(format!(
                "pixel buffer of {} bytes does not match {}x{}",
                self.pixels.len(),
                self.width,
                self.height
            ))
        })
    }
}

/// Decodes, resizes and encodes raster images.
pub trait ImageCodec: Send + Sync {
    /// Decode image file bytes.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage>;

    /// Scale an image to exactly `width` x `height`.
    fn resize(&self, image: &DecodedImage, width: u32, height: u32) -> Result<DecodedImage>;

    /// Encode an image to file bytes.
    fn encode(&self, image: &DecodedImage) -> Result<Vec<u8>>;
}

/// [`ImageCodec`] backed by the `image` crate.
///
/// Decodes PNG, JPEG and GIF. Encodes PNG by default, even though
/// thumbnails are stored under a `.jpg` name.
#[derive(Debug, Clone, Copy)]
pub struct RasterCodec {
    filter: FilterType,
    format: ImageFormat,
}

impl RasterCodec {
    /// PNG output with bicubic (Catmull-Rom) filtering.
    pub fn new() -> Self {
        Self {
            filter: FilterType::CatmullRom,
            format: ImageFormat::Png,
        }
    }

    /// JPEG output instead of PNG.
    pub fn jpeg() -> Self {
        Self {
            format: ImageFormat::Jpeg,
            ..Self::new()
        }
    }

    /// Set the resampling filter.
    pub fn with_filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// Output format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

impl Default for RasterCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCodec for RasterCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = image.dimensions();
        Ok(DecodedImage::new(width, height, image.into_raw()))
    }

    fn resize(&self, image: &DecodedImage, width: u32, height: u32) -> Result<DecodedImage> {
        let buffer = image.to_buffer()?;
        let resized = imageops::resize(&buffer, width, height, self.filter);
        Ok(DecodedImage::new(width, height, resized.into_raw()))
    }

    fn encode(&self, image: &DecodedImage) -> Result<Vec<u8>> {
        let image = DynamicImage::ImageRgba8(image.to_buffer()?);
        // The JPEG encoder has no alpha channel support.
        let image = match self.format {
            ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.to_rgb8()),
            _ => image,
        };

        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, self.format)
            .map_err(|e| Error::ImageEncode(e.to_string()))?;
        Ok(out.into_inner())
    }
}
