//! Thumbnail cache for internal images.
//!
//! Images referenced as `/img/<name>` are looked up in a
//! [`ThumbnailStore`]. Sources wider than the target width get a
//! proportionally scaled thumbnail named `<width>px-<stem>.jpg`, generated
//! once and never overwritten. Every failure here is logged and turns into
//! "no thumbnail"; rendering continues with the original image.

mod codec;
mod store;

pub use codec::{DecodedImage, ImageCodec, RasterCodec};
pub use store::{FsThumbnailStore, MemoryThumbnailStore, ThumbnailStore, DEFAULT_IMAGE_ROOT};

use crate::error::Result;
use crate::model::file_stem;

/// Default thumbnail width in pixels.
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 220;

/// File name of the thumbnail for `file_name` at `width`.
///
/// The extension is always `.jpg`, whatever the source format.
pub fn thumbnail_name(file_name: &str, width: u32) -> String {
    format!("{}px-{}.jpg", width, file_stem(file_name))
}

/// Height that keeps the aspect ratio at `target_width`, rounded, at least 1.
pub fn scaled_height(width: u32, height: u32, target_width: u32) -> u32 {
    if width == 0 {
        return height.max(1);
    }
    let scaled = (u64::from(height) * u64::from(target_width) + u64::from(width) / 2)
        / u64::from(width);
    scaled.clamp(1, u64::from(u32::MAX)) as u32
}

/// A thumbnail available for an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Thumbnail file name under the image root
    pub file_name: String,

    /// Width of the original image
    pub source_width: u32,

    /// Height of the original image
    pub source_height: u32,

    /// Whether the thumbnail was written during this call
    pub generated: bool,
}

/// Looks up and lazily generates thumbnails.
pub struct Thumbnailer<'a> {
    store: &'a dyn ThumbnailStore,
    codec: &'a dyn ImageCodec,
    width: u32,
    generate: bool,
}

impl<'a> Thumbnailer<'a> {
    /// Create a thumbnailer with the default width and generation enabled.
    pub fn new(store: &'a dyn ThumbnailStore, codec: &'a dyn ImageCodec) -> Self {
        Self {
            store,
            codec,
            width: DEFAULT_THUMBNAIL_WIDTH,
            generate: true,
        }
    }

    /// Set the thumbnail width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width.max(1);
        self
    }

    /// Enable or disable writing new thumbnails. Existing ones are still used.
    pub fn with_generation(mut self, generate: bool) -> Self {
        self.generate = generate;
        self
    }

    /// Find (or create) the thumbnail for a source image.
    ///
    /// Returns `None` when the source is missing or unreadable, or when no
    /// thumbnail exists afterwards (small source, generation disabled, or
    /// a failed write).
    pub fn prepare(&self, name: &str) -> Option<Thumbnail> {
        if !self.store.has_source(name) {
            log::debug!("Image not found in store: {}", name);
            return None;
        }

        let image = match self.load(name) {
            Ok(image) => image,
            Err(e) => {
                log::warn!("Failed to load image {}: {}", name, e);
                return None;
            }
        };

        let file_name = thumbnail_name(name, self.width);
        let mut generated = false;

        if self.generate && image.width > self.width && !self.store.has_thumbnail(&file_name) {
            match self.generate_thumbnail(&image, &file_name) {
                Ok(()) => {
                    log::debug!("Generated thumbnail {} for {}", file_name, name);
                    generated = true;
                }
                Err(e) => log::warn!("Failed to write thumbnail {}: {}", file_name, e),
            }
        }

        if !self.store.has_thumbnail(&file_name) {
            return None;
        }

        Some(Thumbnail {
            file_name,
            source_width: image.width,
            source_height: image.height,
            generated,
        })
    }

    fn load(&self, name: &str) -> Result<DecodedImage> {
        let bytes = self.store.read_source(name)?;
        self.codec.decode(&bytes)
    }

    fn generate_thumbnail(&self, image: &DecodedImage, file_name: &str) -> Result<()> {
        let height = scaled_height(image.width, image.height, self.width);
        let resized = self.codec.resize(image, self.width, height)?;
        let bytes = self.codec.encode(&resized)?;
        self.store.write_thumbnail(file_name, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    /// Codec that reads dimensions from an 8-byte header and never touches pixels.
    struct HeaderCodec;

    impl ImageCodec for HeaderCodec {
        fn decode(&self, bytes: &[u8]) -> Result<DecodedImage> {
            if bytes.len() != 8 {
                return Err(Error::ImageDecode("bad header".into()));
            }
            let width = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
            let height = u32::from_be_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
            Ok(DecodedImage::new(width, height, Vec::new()))
        }

        fn resize(&self, _image: &DecodedImage, width: u32, height: u32) -> Result<DecodedImage> {
            Ok(DecodedImage::new(width, height, Vec::new()))
        }

        fn encode(&self, image: &DecodedImage) -> Result<Vec<u8>> {
            Ok(header(image.width, image.height))
        }
    }

    fn header(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = width.to_be_bytes().to_vec();
        bytes.extend_from_slice(&height.to_be_bytes());
        bytes
    }

    #[test]
    fn test_thumbnail_name() {
        assert_eq!(thumbnail_name("Red_Panda.png", 220), "220px-Red_Panda.jpg");
        assert_eq!(thumbnail_name("noext", 100), "100px-noext.jpg");
    }

    #[test]
    fn test_scaled_height() {
        assert_eq!(scaled_height(440, 300, 220), 150);
        assert_eq!(scaled_height(1000, 333, 220), 73);
        assert_eq!(scaled_height(5000, 1, 220), 1);
    }

    #[test]
    fn test_generates_for_wide_source() {
        let store = MemoryThumbnailStore::new().with_source("wide.jpg", header(440, 300));
        let thumbnailer = Thumbnailer::new(&store, &HeaderCodec);

        let thumb = thumbnailer.prepare("wide.jpg").unwrap();
        assert_eq!(thumb.file_name, "220px-wide.jpg");
        assert_eq!((thumb.source_width, thumb.source_height), (440, 300));
        assert!(thumb.generated);
        assert_eq!(store.thumbnail("220px-wide.jpg"), Some(header(220, 150)));
    }

    #[test]
    fn test_existing_thumbnail_not_overwritten() {
        let store = MemoryThumbnailStore::new()
            .with_source("wide.jpg", header(440, 300))
            .with_thumbnail("220px-wide.jpg", vec![7]);
        let thumbnailer = Thumbnailer::new(&store, &HeaderCodec);

        let thumb = thumbnailer.prepare("wide.jpg").unwrap();
        assert!(!thumb.generated);
        assert_eq!(store.thumbnail("220px-wide.jpg"), Some(vec![7]));
    }

    #[test]
    fn test_narrow_source_has_no_thumbnail() {
        let store = MemoryThumbnailStore::new().with_source("small.png", header(200, 100));
        let thumbnailer = Thumbnailer::new(&store, &HeaderCodec);

        assert!(thumbnailer.prepare("small.png").is_none());
        assert_eq!(store.thumbnail_count(), 0);
    }

    #[test]
    fn test_missing_and_undecodable_sources() {
        let store = MemoryThumbnailStore::new().with_source("broken.jpg", vec![1, 2, 3]);
        let thumbnailer = Thumbnailer::new(&store, &HeaderCodec);

        assert!(thumbnailer.prepare("missing.jpg").is_none());
        assert!(thumbnailer.prepare("broken.jpg").is_none());
    }

    #[test]
    fn test_generation_disabled_uses_existing() {
        let store = MemoryThumbnailStore::new()
            .with_source("a.jpg", header(800, 600))
            .with_source("b.jpg", header(800, 600))
            .with_thumbnail("220px-b.jpg", vec![1]);
        let thumbnailer = Thumbnailer::new(&store, &HeaderCodec).with_generation(false);

        assert!(thumbnailer.prepare("a.jpg").is_none());
        assert!(thumbnailer.prepare("b.jpg").is_some());
        assert_eq!(store.thumbnail_count(), 1);
    }

    #[test]
    fn test_custom_width() {
        let store = MemoryThumbnailStore::new().with_source("a.jpg", header(800, 600));
        let thumbnailer = Thumbnailer::new(&store, &HeaderCodec).with_width(100);

        let thumb = thumbnailer.prepare("a.jpg").unwrap();
        assert_eq!(thumb.file_name, "100px-a.jpg");
        assert_eq!(store.thumbnail("100px-a.jpg"), Some(header(100, 75)));
    }
}
