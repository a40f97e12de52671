//! Heading types.

use serde::{Deserialize, Serialize};

/// Heading level supported by the wiki dialect (`==` through `=====`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    /// `==Title==`, opens a TOC section
    H2,
    /// `===Title===`, nested under the current TOC section
    H3,
    /// `====Title====`, not in the TOC
    H4,
    /// `=====Title=====`, not in the TOC
    H5,
}

impl HeadingLevel {
    /// Numeric level (2-5).
    pub fn level(self) -> u8 {
        match self {
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
            HeadingLevel::H5 => 5,
        }
    }

    /// Whether headings of this level appear in the table of contents.
    pub fn in_toc(self) -> bool {
        matches!(self, HeadingLevel::H2 | HeadingLevel::H3)
    }

    /// HTML tag name (`h2`..`h5`).
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
            HeadingLevel::H4 => "h4",
            HeadingLevel::H5 => "h5",
        }
    }
}

/// A heading found in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level
    pub level: HeadingLevel,

    /// Heading text, trimmed
    pub text: String,
}

impl Heading {
    /// Create a heading, trimming surrounding whitespace from the text.
    pub fn new(level: HeadingLevel, text: &str) -> Self {
        Self {
            level,
            text: text.trim().to_string(),
        }
    }

    /// Render as `<hN id="text">text</hN>`.
    pub fn to_html(&self) -> String {
        let tag = self.level.tag();
        format!("<{tag} id=\"{text}\">{text}</{tag}>", text = self.text)
    }
}
