//! Image references found on `<img src="/img/...">` lines.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static IMG_SRC: Lazy<Regex> = Lazy::new(|| Regex::new(r#"src="/img/(.*?)""#).unwrap());

/// Return the part of an image file name before its first `.`.
///
/// Names without a dot are returned whole.
pub fn file_stem(file_name: &str) -> &str {
    match file_name.find('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    }
}

/// An internal image reference parsed from a single line.
///
/// The line is split into three pieces: everything before the first
/// `src`, the `src="/img/..."` attribute itself, and everything from the
/// first `alt` onward. The pieces are reassembled around a thumbnail
/// wrapper by [`ImageReference::to_html`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageReference {
    /// Image file name under the image root (spaces replaced by underscores)
    pub file_name: String,

    /// Text preceding the `src` attribute
    pub prefix: String,

    /// The `src="..."` attribute, possibly rewritten to a thumbnail
    pub src: String,

    /// Text from the `alt` attribute to the end of the line
    pub suffix: String,
}

impl ImageReference {
    /// Check whether a line carries an internal image reference.
    pub fn is_image_line(line: &str) -> bool {
        IMG_SRC.is_match(line)
    }

    /// Parse an image reference out of a line.
    pub fn parse(line: &str) -> Option<Self> {
        let attr = IMG_SRC.find(line)?;
        let src_idx = line.find("src").unwrap_or(attr.start());

        let src = attr.as_str().replace(' ', "_");
        let file_name = IMG_SRC
            .captures(&src)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())?;

        let suffix = line.find("alt").map(|idx| &line[idx..]).unwrap_or("");

        Some(Self {
            file_name,
            prefix: line[..src_idx].to_string(),
            src,
            suffix: suffix.to_string(),
        })
    }

    /// File name without extension.
    pub fn stem(&self) -> &str {
        file_stem(&self.file_name)
    }

    /// Caption shown under the image: the stem with underscores as spaces.
    pub fn caption(&self) -> String {
        self.stem().replace('_', " ")
    }

    /// Point `src` at a thumbnail and record the original dimensions.
    pub fn apply_thumbnail(&mut self, thumbnail_name: &str, width: u32, height: u32) {
        self.src = format!(
            r#"src="/img/{}" data-file-width="{}" data-file-height="{}" "#,
            thumbnail_name, width, height
        );
    }

    /// Rebuild the line as a right-floated thumbnail figure.
    pub fn to_html(&self) -> String {
        format!(
            r#"<div class="thumb right"><a href="/img/{}">{} {} {}</a><figcaption>{}</figcaption></div>"#,
            self.file_name,
            self.prefix,
            self.src,
            self.suffix,
            self.caption()
        )
    }
}
