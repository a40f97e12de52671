//! Inline substitutions: emphasis, links, embeds and paragraph breaks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches most http(s) URLs.
///
/// Group 1 is the whole URL, group 2 the optional `www.`, group 3 the path.
/// The word boundary after the top-level domain is ASCII-only.
const URL: &str = r"(https?://(www\.)?[-a-zA-Z0-9@:%._\+~#=;!]{2,256}\.[a-z]{2,6}(?-u:\b)([-a-zA-Z0-9@:%_\+.~#?&/=;!]*))";

static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"----").unwrap());
static QUOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\$ (.*)").unwrap());
static BOLD_ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*\*(.*?)\*\*\*").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static YOUTUBE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://www\.youtube\.com/watch\?v=([a-zA-Z0-9_]*)").unwrap()
});
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9_]+@[a-zA-Z0-9_]+\.[a-zA-Z0-9_]+(\.[a-zA-Z0-9_]+)?").unwrap()
});
static MARKDOWN_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());
static ENTRY_LINK_CAPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[\[([^\]\[:]+)\|([^\]\[:]+)\]\]").unwrap());
static EXTERNAL_CAPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\[{URL}\s([^\]]+)\]")).unwrap());
static EXTERNAL_BARE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"\[?{URL}\]?( |\n)")).unwrap());
static EXTERNAL_LINE_END: Lazy<Regex> = Lazy::new(|| Regex::new(&format!(r"(?m){URL}$")).unwrap());
static EXTERNAL_MARKDOWN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([a-z]+)\]\(([a-zA-Z0-9_/:.-;!]+)\)").unwrap());
static ENTRY_LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\[(.*?)\]\]").unwrap());
static EMPTY_PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^<p>$").unwrap());
static HEADING_PARAGRAPH: Lazy<Regex> = Lazy::new(|| Regex::new(r"<p>(<h[1-5].*)").unwrap());

const YOUTUBE_EMBED: &str = concat!(
    r#"<object style="width:100%;height:100%;width:420px;height:315px;"#,
    r#"float:none;clear:both;margin:2px auto;" "#,
    r#"data="http://www.youtube.com/embed/${1}"></object>"#
);

/// Inline transformer.
///
/// Applies a fixed sequence of whole-text substitutions. Later patterns
/// rely on earlier ones having run: emphasis is resolved longest marker
/// first, captioned links before bare ones, and paragraph breaks last.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineTransformer;

impl InlineTransformer {
    /// Create a new inline transformer.
    pub fn new() -> Self {
        Self
    }

    /// Run every substitution over `text`.
    pub fn transform(&self, text: &str) -> String {
        let mut result = RULE.replace_all(text, "<hr>").into_owned();
        result = QUOTE
            .replace_all(&result, "<blockquote>${1}</blockquote>")
            .into_owned();

        result = self.emphasis(&result);
        result = self.embeds(&result);
        result = self.links(&result);

        self.paragraphs(&result)
    }

    /// `***x***`, `**x**` and `*x*`.
    fn emphasis(&self, text: &str) -> String {
        let result = BOLD_ITALIC.replace_all(text, "<b><i>${1}</i></b>");
        let result = BOLD.replace_all(&result, "<b>${1}</b>").into_owned();
        ITALIC.replace_all(&result, "<i>${1}</i>").into_owned()
    }

    /// YouTube embeds, mail links and Markdown images.
    fn embeds(&self, text: &str) -> String {
        let result = YOUTUBE.replace_all(text, YOUTUBE_EMBED);
        let result = EMAIL
            .replace_all(&result, r#"<a href="mailto:${0}">${0}</a>"#)
            .into_owned();
        MARKDOWN_IMAGE
            .replace_all(&result, r#"<img src="/img/${2}" alt="${1}">"#)
            .into_owned()
    }

    /// Entry links and external links, captioned forms first.
    fn links(&self, text: &str) -> String {
        let mut result = ENTRY_LINK_CAPTION
            .replace_all(text, r#"<a href="/entries/${1}">${2}</a>"#)
            .into_owned();
        result = EXTERNAL_CAPTION
            .replace_all(&result, r#"<a class="external" href="${1}">${4}</a>"#)
            .into_owned();
        result = EXTERNAL_BARE
            .replace_all(&result, r#"<a class="external" href="${1}">${1}</a>${4}"#)
            .into_owned();
        result = EXTERNAL_LINE_END
            .replace_all(&result, r#"<a class="external" href="${1}">${1}</a>"#)
            .into_owned();
        result = EXTERNAL_MARKDOWN
            .replace_all(&result, r#"<a class="external" href="${2}">${1}</a>"#)
            .into_owned();
        ENTRY_LINK
            .replace_all(&result, r#"<a href="/entries/${1}">${1}</a>"#)
            .into_owned()
    }

    /// Open a paragraph after every line break, except for empty lines and
    /// headings.
    fn paragraphs(&self, text: &str) -> String {
        let result = text.replace('\n', "\n<p>");
        let result = EMPTY_PARAGRAPH.replace_all(&result, "");
        HEADING_PARAGRAPH.replace_all(&result, "${1}").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(text: &str) -> String {
        InlineTransformer::new().transform(text)
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(transform("----"), "<hr>");
    }

    #[test]
    fn test_blockquote_marker() {
        assert_eq!(transform("$ wise"), "<blockquote>wise</blockquote>");
    }

    #[test]
    fn test_emphasis() {
        assert_eq!(transform("***x***"), "<b><i>x</i></b>");
        assert_eq!(transform("**x**"), "<b>x</b>");
        assert_eq!(transform("*x*"), "<i>x</i>");
        assert_eq!(transform("a **b** *c*"), "a <b>b</b> <i>c</i>");
    }

    #[test]
    fn test_youtube_embed() {
        let out = transform("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert!(out.starts_with("<object style="));
        assert!(out.contains(r#"data="http://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(!out.contains("class=\"external\""));
    }

    #[test]
    fn test_email() {
        assert_eq!(
            transform("mail me@example.com now"),
            r#"mail <a href="mailto:me@example.com">me@example.com</a> now"#
        );
    }

    #[test]
    fn test_markdown_image() {
        assert_eq!(
            transform("![a cat](cat.png)"),
            r#"<img src="/img/cat.png" alt="a cat">"#
        );
    }

    #[test]
    fn test_entry_links() {
        assert_eq!(
            transform("[[Page|Label]]"),
            r#"<a href="/entries/Page">Label</a>"#
        );
        assert_eq!(transform("[[Page]]"), r#"<a href="/entries/Page">Page</a>"#);
    }

    #[test]
    fn test_external_with_caption() {
        assert_eq!(
            transform("see [https://example.com/docs the docs] here"),
            r#"see <a class="external" href="https://example.com/docs">the docs</a> here"#
        );
    }

    #[test]
    fn test_bare_url_followed_by_space() {
        assert_eq!(
            transform("go https://example.com/x now"),
            r#"go <a class="external" href="https://example.com/x">https://example.com/x</a> now"#
        );
    }

    #[test]
    fn test_bare_url_at_line_end() {
        assert_eq!(
            transform("https://example.com/x"),
            r#"<a class="external" href="https://example.com/x">https://example.com/x</a>"#
        );
    }

    #[test]
    fn test_url_boundary_is_ascii() {
        let url = Regex::new(URL).unwrap();
        let found = url.find("https://example.com\u{e9}").map(|m| m.as_str());
        assert_eq!(found, Some("https://example.com"));
    }

    #[test]
    fn test_markdown_link() {
        assert_eq!(
            transform("[home](/entries/Home)"),
            r#"<a class="external" href="/entries/Home">home</a>"#
        );
    }

    #[test]
    fn test_paragraphs() {
        assert_eq!(transform("one\ntwo"), "one\n<p>two");
        assert_eq!(transform("one\n\ntwo"), "one\n\n<p>two");
    }

    #[test]
    fn test_headings_not_wrapped() {
        assert_eq!(
            transform("intro\n<h2 id=\"A\">A</h2>"),
            "intro\n<h2 id=\"A\">A</h2>"
        );
    }
}
