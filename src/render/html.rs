//! The full wiki-to-HTML pipeline.

use std::sync::Arc;

use crate::parser::{normalize, HeadingExtractor};
use crate::thumbnail::{FsThumbnailStore, ImageCodec, RasterCodec, ThumbnailStore, Thumbnailer};

use super::{
    substitute_emoticons, BlockTransformer, Escaper, HtmlEscaper, InlineTransformer,
    RenderOptions, RenderResult, RenderStats,
};

/// Render wiki markup to HTML with the given options.
pub fn to_html(text: &str, options: &RenderOptions) -> RenderResult {
    HtmlRenderer::new(options.clone()).render(text)
}

/// HTML renderer.
///
/// Runs normalize, escape, heading extraction, block and inline
/// transformation in that order. Rendering never fails; thumbnail
/// problems are logged and the image keeps its original `src`.
pub struct HtmlRenderer {
    options: RenderOptions,
    store: Arc<dyn ThumbnailStore>,
    codec: Arc<dyn ImageCodec>,
    escaper: Arc<dyn Escaper>,
}

impl HtmlRenderer {
    /// Create a renderer backed by the filesystem under `options.image_root`.
    pub fn new(options: RenderOptions) -> Self {
        let store = Arc::new(FsThumbnailStore::new(options.image_root.clone()));
        Self {
            options,
            store,
            codec: Arc::new(RasterCodec::new()),
            escaper: Arc::new(HtmlEscaper),
        }
    }

    /// Use a different thumbnail store.
    pub fn with_store(mut self, store: Arc<dyn ThumbnailStore>) -> Self {
        self.store = store;
        self
    }

    /// Use a different image codec.
    pub fn with_codec(mut self, codec: Arc<dyn ImageCodec>) -> Self {
        self.codec = codec;
        self
    }

    /// Use a different escaper.
    pub fn with_escaper(mut self, escaper: Arc<dyn Escaper>) -> Self {
        self.escaper = escaper;
        self
    }

    /// Render options in use.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Render wiki markup.
    pub fn render(&self, text: &str) -> RenderResult {
        let normalized = normalize(text);
        let escaped = self.escaper.escape(&normalized);

        let headings = HeadingExtractor::new().extract(&escaped);
        let (body, block_stats) = self.block_transformer().transform_with_stats(&headings.text);

        let mut html = InlineTransformer::new().transform(&body);
        if self.options.emoticons {
            html = substitute_emoticons(&html);
        }

        let stats = RenderStats::collect(headings.heading_count, &headings.toc, block_stats);
        log::debug!(
            "Rendered {} bytes of markup into {} bytes of HTML ({} sections, {} images)",
            text.len(),
            html.len(),
            stats.section_count,
            stats.image_count
        );

        RenderResult::new(html, headings.toc, stats)
    }

    fn block_transformer(&self) -> BlockTransformer<'_> {
        let transformer = BlockTransformer::new();
        if !self.options.thumbnails {
            return transformer;
        }

        let thumbnailer = Thumbnailer::new(self.store.as_ref(), self.codec.as_ref())
            .with_width(self.options.thumbnail_width)
            .with_generation(self.options.generate_thumbnails);
        transformer.with_thumbnailer(thumbnailer)
    }
}
