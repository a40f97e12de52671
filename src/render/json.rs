//! JSON output for the table of contents and render results.

use serde::Serialize;

use super::RenderResult;
use crate::error::{Error, Result};
use crate::model::TableOfContents;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize a table of contents as nested string arrays.
pub fn toc_to_json(toc: &TableOfContents, format: JsonFormat) -> Result<String> {
    to_json(toc, format)
}

/// Serialize a full render result (HTML, TOC and statistics).
pub fn result_to_json(result: &RenderResult, format: JsonFormat) -> Result<String> {
    to_json(result, format)
}

fn to_json<T: Serialize>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
