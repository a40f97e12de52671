//! Rewrites wiki-only syntax into the dialect the rest of the pipeline reads.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_STAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\*(.*)").unwrap());
static BOLD_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"'''''(.*?)'''''").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"'''(.*?)'''").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"''(.*?)''").unwrap());
static BLOCKQUOTE_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<blockquote>(?:\r?\n)?(.*)(?:\r?\n)?</blockquote>").unwrap()
});
static QUOTE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^> (.*)").unwrap());
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!--.*?-->").unwrap());

/// Normalize wiki markup.
///
/// Each pass runs over the full output of the previous one:
///
/// 1. `*` list markers at line start become `%`, freeing `*` for emphasis.
/// 2. `'''''`, `'''` and `''` emphasis become `***`, `**` and `*`, longest
///    run first.
/// 3. A one-line `<blockquote>` block becomes a `> ` line, and `> ` lines
///    become `$ ` lines.
/// 4. HTML comments are removed.
///
/// No escaping happens here; the output still contains raw user text.
pub fn normalize(text: &str) -> String {
    let mut result = LIST_STAR.replace_all(text, "%${1}").into_owned();

    result = BOLD_ITALIC.replace_all(&result, "***${1}***").into_owned();
    result = BOLD.replace_all(&result, "**${1}**").into_owned();
    result = ITALIC.replace_all(&result, "*${1}*").into_owned();

    result = BLOCKQUOTE_TAG.replace_all(&result, "> ${1}").into_owned();
    result = QUOTE_LINE.replace_all(&result, "$$ ${1}").into_owned();

    COMMENT.replace_all(&result, "").into_owned()
}
