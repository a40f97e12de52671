//! # wikidown
//!
//! Wiki-flavored markup to HTML conversion for personal wikis and blogs.
//!
//! The input mixes MediaWiki-style markup (`''italic''`, `'''bold'''`,
//! `[[links]]`, `* lists`, `==headings==`) with a few Markdown-style tokens
//! (`**bold**`, `[label](url)`, `![alt](img)`). Rendering produces HTML plus
//! a two-level table of contents built from `==` and `===` headings.
//!
//! ## Quick Start
//!
//! ```no_run
//! let result = wikidown::render("== Intro ==\n''Hello'' [[World]]");
//!
//! println!("{}", result.html);
//! for section in &result.toc {
//!     println!("{} ({} subsections)", section.title, section.subsections.len());
//! }
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parser::normalize`] rewrites wiki syntax into internal markers
//! 2. [`render::Escaper`] escapes the text for HTML
//! 3. [`parser::extract_headings`] converts headings and builds the TOC
//! 4. [`render::BlockTransformer`] handles lists and thumbnailed images
//! 5. [`render::InlineTransformer`] handles emphasis, links and paragraphs
//!
//! [`substitute_emoticons`] is a separate pass, off by default.

pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod thumbnail;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Heading, HeadingLevel, ImageReference, Section, TableOfContents};
pub use parser::{extract_headings, normalize};
pub use render::{
    substitute_emoticons, to_html, HtmlRenderer, JsonFormat, RenderOptions, RenderResult,
    RenderStats,
};
pub use thumbnail::{
    FsThumbnailStore, ImageCodec, MemoryThumbnailStore, RasterCodec, ThumbnailStore,
    DEFAULT_THUMBNAIL_WIDTH,
};

use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Render wiki markup to HTML with default options.
///
/// Thumbnails are looked up (and generated) under `img/` relative to the
/// working directory. Rendering never fails.
///
/// # Example
///
/// ```no_run
/// let (html, toc) = wikidown::render("== A ==\n=== A1 ===\n== B ==").into_parts();
/// assert_eq!(toc.to_nested(), vec![vec!["A", "A1"], vec!["B"]]);
/// # let _ = html;
/// ```
pub fn render(text: &str) -> RenderResult {
    to_html(text, &RenderOptions::default())
}

/// Render wiki markup to HTML with custom options.
///
/// # Example
///
/// ```no_run
/// use wikidown::{render_with_options, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_image_root("static/img")
///     .with_emoticons(true);
/// let result = render_with_options("Hello :)", &options);
/// ```
pub fn render_with_options(text: &str, options: &RenderOptions) -> RenderResult {
    to_html(text, options)
}

/// Read a UTF-8 file and render it.
///
/// # Example
///
/// ```no_run
/// let result = wikidown::render_file("entries/home.wiki")?;
/// std::fs::write("home.html", result.html)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_file<P: AsRef<Path>>(path: P) -> Result<RenderResult> {
    let text = fs::read_to_string(path)?;
    Ok(render(&text))
}

/// Builder for configuring and running the renderer.
///
/// # Example
///
/// ```no_run
/// use wikidown::Wikidown;
///
/// let result = Wikidown::new()
///     .with_image_root("./public/img")
///     .with_thumbnail_width(300)
///     .with_emoticons()
///     .render("'''Welcome''' :D");
/// ```
pub struct Wikidown {
    options: RenderOptions,
    store: Option<Arc<dyn ThumbnailStore>>,
    codec: Option<Arc<dyn ImageCodec>>,
}

impl Wikidown {
    /// Create a new Wikidown builder.
    pub fn new() -> Self {
        Self {
            options: RenderOptions::default(),
            store: None,
            codec: None,
        }
    }

    /// Set the image root directory.
    pub fn with_image_root(mut self, root: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_image_root(root);
        self
    }

    /// Set the thumbnail width.
    pub fn with_thumbnail_width(mut self, width: u32) -> Self {
        self.options = self.options.with_thumbnail_width(width);
        self
    }

    /// Skip thumbnail lookups entirely.
    pub fn without_thumbnails(mut self) -> Self {
        self.options = self.options.with_thumbnails(false);
        self
    }

    /// Use existing thumbnails but never write new ones.
    pub fn read_only_thumbnails(mut self) -> Self {
        self.options = self.options.with_thumbnail_generation(false);
        self
    }

    /// Run the emoticon substitutor after rendering.
    pub fn with_emoticons(mut self) -> Self {
        self.options = self.options.with_emoticons(true);
        self
    }

    /// Use a custom thumbnail store instead of the filesystem.
    pub fn with_store(mut self, store: Arc<dyn ThumbnailStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a custom image codec.
    pub fn with_codec(mut self, codec: Arc<dyn ImageCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Build the configured renderer.
    pub fn renderer(&self) -> HtmlRenderer {
        let mut renderer = HtmlRenderer::new(self.options.clone());
        if let Some(ref store) = self.store {
            renderer = renderer.with_store(store.clone());
        }
        if let Some(ref codec) = self.codec {
            renderer = renderer.with_codec(codec.clone());
        }
        renderer
    }

    /// Render wiki markup.
    pub fn render(&self, text: &str) -> RenderResult {
        self.renderer().render(text)
    }

    /// Read a UTF-8 file and render it.
    pub fn render_file<P: AsRef<Path>>(&self, path: P) -> Result<RenderResult> {
        let text = fs::read_to_string(path)?;
        Ok(self.render(&text))
    }
}

impl Default for Wikidown {
    fn default() -> Self {
        Self::new()
    }
}
