//! Rendering result with table of contents and statistics.

use serde::{Deserialize, Serialize};

use super::BlockStats;
use crate::model::TableOfContents;

/// Result of rendering a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered HTML
    pub html: String,

    /// Table of contents from level-2/level-3 headings
    pub toc: TableOfContents,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(html: String, toc: TableOfContents, stats: RenderStats) -> Self {
        Self { html, toc, stats }
    }

    /// Split into `(html, toc)`.
    pub fn into_parts(self) -> (String, TableOfContents) {
        (self.html, self.toc)
    }

    /// Get the HTML length in bytes.
    pub fn html_len(&self) -> usize {
        self.html.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Headings converted, all levels
    pub heading_count: u32,

    /// TOC sections (level-2 headings)
    pub section_count: u32,

    /// TOC subsections (level-3 headings attached to a section)
    pub subsection_count: u32,

    /// List lines rewritten
    pub list_item_count: u32,

    /// Image lines wrapped in a thumbnail figure
    pub image_count: u32,

    /// Images pointing at a thumbnail
    pub thumbnail_count: u32,
}

impl RenderStats {
    /// Combine heading, TOC and block pass counts.
    pub fn collect(heading_count: usize, toc: &TableOfContents, block: BlockStats) -> Self {
        Self {
            heading_count: saturating_u32(heading_count),
            section_count: saturating_u32(toc.len()),
            subsection_count: saturating_u32(toc.subsection_count()),
            list_item_count: block.list_item_count,
            image_count: block.image_count,
            thumbnail_count: block.thumbnail_count,
        }
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_stats() {
        let mut toc = TableOfContents::new();
        toc.open_section("A");
        toc.add_subsection("A1");
        toc.open_section("B");

        let block = BlockStats {
            list_item_count: 3,
            image_count: 1,
            thumbnail_count: 1,
        };
        let stats = RenderStats::collect(4, &toc, block);

        assert_eq!(stats.heading_count, 4);
        assert_eq!(stats.section_count, 2);
        assert_eq!(stats.subsection_count, 1);
        assert_eq!(stats.list_item_count, 3);
        assert_eq!(stats.thumbnail_count, 1);
    }

    #[test]
    fn test_into_parts() {
        let result = RenderResult::new("<p>x".into(), TableOfContents::new(), RenderStats::default());
        assert_eq!(result.html_len(), 4);
        let (html, toc) = result.into_parts();
        assert_eq!(html, "<p>x");
        assert!(toc.is_empty());
    }
}
