//! Document model types for the wiki rendering pipeline.
//!
//! These are the small, per-call structures the pipeline stages pass
//! between each other: headings and the table of contents they build,
//! image references parsed from individual lines, and the run state the
//! block scanner keeps for each list kind.

mod heading;
mod image;
mod list;
mod toc;

pub use heading::{Heading, HeadingLevel};
pub use image::{file_stem, ImageReference};
pub use list::{DescriptionLine, DescriptionListRun, ListKind, ListRun, RunStep};
pub use toc::{Section, TableOfContents};
