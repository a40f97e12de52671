//! Line-oriented block transformation: lists and thumbnailed images.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{DescriptionLine, DescriptionListRun, ImageReference, ListKind, ListRun, RunStep};
use crate::thumbnail::Thumbnailer;

static FILE_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[File:(.*?)\|(thumb(?:nail)?)\|(.*?)\]\]").unwrap());
static UNORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^%(.*)").unwrap());
static ORDERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#(.*)").unwrap());
static DESCRIPTION_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^;(.*)").unwrap());
static DESCRIPTION_DEFINITION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^:(.*)").unwrap());
static DESCRIPTION_SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^;([^:]*):(.*)").unwrap());

/// Counts collected by one block pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStats {
    /// List lines rewritten (`<li>`, `<dt>`, `<dd>`, single-line `<dl>`)
    pub list_item_count: u32,

    /// Image lines wrapped in a thumbnail figure
    pub image_count: u32,

    /// Images whose `src` now points at a thumbnail
    pub thumbnail_count: u32,
}

/// Block transformer.
///
/// Scans the document line by line. Each line is checked, in order, for an
/// internal image, an unordered item (`%`), an ordered item (`#`) and a
/// description entry (`;`/`:`). All three list kinds keep independent run
/// state and are evaluated against the original line, so a later match
/// replaces an earlier rewrite of the same line. Closing tags go on the
/// last line of the run; runs still open at the end close on the last line.
#[derive(Default)]
pub struct BlockTransformer<'a> {
    thumbnailer: Option<Thumbnailer<'a>>,
}

impl<'a> BlockTransformer<'a> {
    /// Create a transformer that wraps images without thumbnail lookups.
    pub fn new() -> Self {
        Self { thumbnailer: None }
    }

    /// Use `thumbnailer` to resolve thumbnails for image lines.
    pub fn with_thumbnailer(mut self, thumbnailer: Thumbnailer<'a>) -> Self {
        self.thumbnailer = Some(thumbnailer);
        self
    }

    /// Transform escaped text.
    pub fn transform(&self, text: &str) -> String {
        self.transform_with_stats(text).0
    }

    /// Transform escaped text and report what was rewritten.
    pub fn transform_with_stats(&self, text: &str) -> (String, BlockStats) {
        let text = text.replace('\r', "");
        let text = FILE_LINK.replace_all(&text, r#"<img src="/img/${1}" alt="${3}">"#);

        let mut stats = BlockStats::default();
        let mut lines: Vec<String> = Vec::new();

        let mut unordered = ListRun::new();
        let mut ordered = ListRun::new();
        let mut description = DescriptionListRun::new();

        for line in text.split('\n') {
            let mut output = line.to_string();

            if ImageReference::is_image_line(line) {
                output = self.render_image(line, &mut stats);
            }

            for (kind, re, run) in [
                (ListKind::Unordered, &*UNORDERED_ITEM, &mut unordered),
                (ListKind::Ordered, &*ORDERED_ITEM, &mut ordered),
            ] {
                let step = run.advance(re.is_match(line));
                match step {
                    RunStep::Opened | RunStep::Continued => {
                        output = re.replace(line, "<li>${1}</li>").into_owned();
                        if step == RunStep::Opened {
                            output.insert_str(0, kind.open_tag());
                        }
                        stats.list_item_count += 1;
                    }
                    RunStep::Closed => close_run(&mut lines, kind),
                    RunStep::Idle => {}
                }
            }

            let entry = classify_description(line);
            let step = description.advance(entry);
            match (entry, step) {
                (DescriptionLine::SingleLine, _) => {
                    output = DESCRIPTION_SINGLE
                        .replace(line, "<dl><dt>${1}</dt><dd>${2}</dd></dl>")
                        .into_owned();
                    stats.list_item_count += 1;
                }
                (DescriptionLine::Term, _) => {
                    output = DESCRIPTION_TERM.replace(line, "<dt>${1}</dt>").into_owned();
                    if step == RunStep::Opened {
                        output.insert_str(0, ListKind::Description.open_tag());
                    }
                    stats.list_item_count += 1;
                }
                (DescriptionLine::Definition, RunStep::Continued) => {
                    output = DESCRIPTION_DEFINITION
                        .replace(line, "<dd>${1}</dd>")
                        .into_owned();
                    stats.list_item_count += 1;
                }
                (_, RunStep::Closed) => close_run(&mut lines, ListKind::Description),
                _ => {}
            }

            lines.push(output);
        }

        if unordered.finish() {
            close_run(&mut lines, ListKind::Unordered);
        }
        if ordered.finish() {
            close_run(&mut lines, ListKind::Ordered);
        }
        if description.finish() {
            close_run(&mut lines, ListKind::Description);
        }

        (lines.join("\n"), stats)
    }

    fn render_image(&self, line: &str, stats: &mut BlockStats) -> String {
        let Some(mut image) = ImageReference::parse(line) else {
            return line.to_string();
        };
        stats.image_count += 1;

        let thumbnail = self
            .thumbnailer
            .as_ref()
            .and_then(|thumbnailer| thumbnailer.prepare(&image.file_name));
        if let Some(thumb) = thumbnail {
            image.apply_thumbnail(&thumb.file_name, thumb.source_width, thumb.source_height);
            stats.thumbnail_count += 1;
        }

        image.to_html()
    }
}

fn classify_description(line: &str) -> DescriptionLine {
    if DESCRIPTION_TERM.is_match(line) {
        if DESCRIPTION_SINGLE.is_match(line) {
            DescriptionLine::SingleLine
        } else {
            DescriptionLine::Term
        }
    } else if DESCRIPTION_DEFINITION.is_match(line) {
        DescriptionLine::Definition
    } else {
        DescriptionLine::Other
    }
}

/// Append the closing tag to the last emitted line of the run.
fn close_run(lines: &mut [String], kind: ListKind) {
    if let Some(last) = lines.last_mut() {
        last.push_str(kind.close_tag());
    }
}
