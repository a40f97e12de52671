//! Heading conversion and table of contents extraction.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::model::{Heading, HeadingLevel, TableOfContents};

static H5: Lazy<Regex> = Lazy::new(|| Regex::new(r"=====(.*?)=====").unwrap());
static H4: Lazy<Regex> = Lazy::new(|| Regex::new(r"====(.*?)====").unwrap());
static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"===(.*?)===").unwrap());
static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"==(.*?)==").unwrap());

/// Result of heading extraction.
#[derive(Debug, Clone, Default)]
pub struct ExtractedHeadings {
    /// Text with every heading converted to an `<hN>` tag
    pub text: String,

    /// Table of contents built from level-2 and level-3 headings
    pub toc: TableOfContents,

    /// Number of headings converted, all levels
    pub heading_count: usize,
}

/// Convert headings and build the table of contents.
///
/// Levels 4 and 5 are converted first and never reach the table of
/// contents. Levels 2 and 3 are collected from a whitespace tokenization
/// of the text, then converted in place (level 3 before level 2).
pub fn extract_headings(text: &str) -> (String, TableOfContents) {
    let extracted = HeadingExtractor::new().extract(text);
    (extracted.text, extracted.toc)
}

/// Heading extractor.
#[derive(Debug, Default)]
pub struct HeadingExtractor {
    heading_count: usize,
}

impl HeadingExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run extraction over escaped text.
    pub fn extract(mut self, text: &str) -> ExtractedHeadings {
        let text = self.convert(&H5, HeadingLevel::H5, text);
        let text = self.convert(&H4, HeadingLevel::H4, &text);

        let toc = build_toc(&text);

        let text = self.convert(&H3, HeadingLevel::H3, &text);
        let text = self.convert(&H2, HeadingLevel::H2, &text);

        log::debug!(
            "Converted {} headings, {} TOC sections",
            self.heading_count,
            toc.len()
        );

        ExtractedHeadings {
            text,
            toc,
            heading_count: self.heading_count,
        }
    }

    fn convert(&mut self, re: &Regex, level: HeadingLevel, text: &str) -> String {
        let count = &mut self.heading_count;
        re.replace_all(text, |caps: &Captures| {
            *count += 1;
            Heading::new(level, &caps[1]).to_html()
        })
        .into_owned()
    }
}

/// Build the two-level table of contents from heading candidates.
fn build_toc(text: &str) -> TableOfContents {
    let mut toc = TableOfContents::new();

    for candidate in heading_candidates(text) {
        if let Some(caps) = H3.captures(&candidate) {
            let heading = Heading::new(HeadingLevel::H3, &caps[1]);
            if !toc.add_subsection(heading.text) {
                log::debug!("Dropping level-3 heading before any section: {}", &caps[1]);
            }
        } else if let Some(caps) = H2.captures(&candidate) {
            toc.open_section(Heading::new(HeadingLevel::H2, &caps[1]).text);
        }
    }

    toc
}

/// Split each line on whitespace, re-joining headings that contain spaces.
///
/// A token starting with `==` that either consists only of `=` or does not
/// end with `==` opens a multi-word heading. Following tokens on the same
/// line are joined with single spaces up to and including the first one
/// ending in `==`. Joined tokens are consumed. Without a closing token on
/// that line the opener stands alone.
fn heading_candidates(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    for line in text.lines() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let mut i = 0;

        while i < tokens.len() {
            let token = tokens[i];
            let mut next = i + 1;
            let mut candidate = token.to_string();

            if opens_multiword_heading(token) {
                if let Some(offset) = tokens[i + 1..].iter().position(|t| t.ends_with("==")) {
                    let end = i + 1 + offset;
                    candidate = tokens[i..=end].join(" ");
                    next = end + 1;
                }
            }

            candidates.push(candidate);
            i = next;
        }
    }

    candidates
}

fn opens_multiword_heading(token: &str) -> bool {
    token.starts_with("==") && (token.bytes().all(|b| b == b'=') || !token.ends_with("=="))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toc_nesting() {
        let (_, toc) = extract_headings("== A ==\n=== A1 ===\n== B ==");
        assert_eq!(toc.to_nested(), vec![vec!["A", "A1"], vec!["B"]]);
    }

    #[test]
    fn test_compact_headings() {
        let (text, toc) = extract_headings("==Intro==\n===Goals===");
        assert_eq!(text, "<h2 id=\"Intro\">Intro</h2>\n<h3 id=\"Goals\">Goals</h3>");
        assert_eq!(toc.to_nested(), vec![vec!["Intro", "Goals"]]);
    }

    #[test]
    fn test_multiword_heading() {
        let (text, toc) = extract_headings("==Getting started==\nbody\n=== The first step ===");
        assert_eq!(
            toc.to_nested(),
            vec![vec!["Getting started", "The first step"]]
        );
        assert!(text.contains(r#"<h2 id="Getting started">Getting started</h2>"#));
        assert!(text.contains(r#"<h3 id="The first step">The first step</h3>"#));
    }

    #[test]
    fn test_orphan_subsection_converted_but_not_listed() {
        let (text, toc) = extract_headings("===x===\ntext");
        assert_eq!(text, "<h3 id=\"x\">x</h3>\ntext");
        assert!(toc.is_empty());
    }

    #[test]
    fn test_deep_headings_skip_toc() {
        let (text, toc) = extract_headings("=====Five=====\n====Four====");
        assert_eq!(text, "<h5 id=\"Five\">Five</h5>\n<h4 id=\"Four\">Four</h4>");
        assert!(toc.is_empty());
    }

    #[test]
    fn test_unterminated_marker_left_alone() {
        let (text, toc) = extract_headings("a == b");
        assert_eq!(text, "a == b");
        assert!(toc.is_empty());
    }

    #[test]
    fn test_heading_count() {
        let extracted = HeadingExtractor::new().extract("==A==\n===B===\n====C====\nplain");
        assert_eq!(extracted.heading_count, 3);
        assert_eq!(extracted.toc.len(), 1);
    }

    #[test]
    fn test_comparison_in_prose_does_not_reach_next_line() {
        let (text, toc) = extract_headings("==Intro==\nif a == b\n==Next==");
        assert_eq!(toc.to_nested(), vec![vec!["Intro"], vec!["Next"]]);
        assert_eq!(
            text,
            "<h2 id=\"Intro\">Intro</h2>\nif a == b\n<h2 id=\"Next\">Next</h2>"
        );
    }

    #[test]
    fn test_candidates_stay_within_line() {
        assert_eq!(
            heading_candidates("x ==\nend=="),
            vec!["x".to_string(), "==".to_string(), "end==".to_string()]
        );
    }

    #[test]
    fn test_candidates_consume_joined_tokens() {
        assert_eq!(
            heading_candidates("== A == tail"),
            vec!["== A ==".to_string(), "tail".to_string()]
        );
        assert_eq!(
            heading_candidates("==open words"),
            vec!["==open".to_string(), "words".to_string()]
        );
    }
}
