//! Front half of the pipeline: wiki normalization and heading extraction.

mod headings;
mod normalize;

pub use headings::{extract_headings, ExtractedHeadings, HeadingExtractor};
pub use normalize::normalize;
