//! Rendering options and configuration.

use std::path::PathBuf;

use crate::thumbnail::{DEFAULT_IMAGE_ROOT, DEFAULT_THUMBNAIL_WIDTH};

/// Options for rendering wiki markup.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Directory holding source images and generated thumbnails
    pub image_root: PathBuf,

    /// Thumbnail width in pixels
    pub thumbnail_width: u32,

    /// Look up thumbnails for internal images
    pub thumbnails: bool,

    /// Write missing thumbnails (existing ones are used either way)
    pub generate_thumbnails: bool,

    /// Run the emoticon substitutor after the main pipeline
    pub emoticons: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image root directory.
    pub fn with_image_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.image_root = root.into();
        self
    }

    /// Set the thumbnail width.
    pub fn with_thumbnail_width(mut self, width: u32) -> Self {
        self.thumbnail_width = width.max(1);
        self
    }

    /// Enable or disable thumbnail lookups.
    pub fn with_thumbnails(mut self, enabled: bool) -> Self {
        self.thumbnails = enabled;
        self
    }

    /// Enable or disable writing new thumbnails.
    pub fn with_thumbnail_generation(mut self, generate: bool) -> Self {
        self.generate_thumbnails = generate;
        self
    }

    /// Enable or disable emoticon substitution.
    pub fn with_emoticons(mut self, enabled: bool) -> Self {
        self.emoticons = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_root: PathBuf::from(DEFAULT_IMAGE_ROOT),
            thumbnail_width: DEFAULT_THUMBNAIL_WIDTH,
            thumbnails: true,
            generate_thumbnails: true,
            emoticons: false,
        }
    }
}
