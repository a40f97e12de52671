//! HTML escaping of user text.

/// Escapes raw text for embedding in HTML.
pub trait Escaper: Send + Sync {
    /// Escape `text`.
    fn escape(&self, text: &str) -> String;
}

/// Standard escaper for `&`, `<`, `>`, `"` and `'`.
///
/// Quotes become numeric references (`&#34;`, `&#39;`); NUL becomes
/// U+FFFD.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEscaper;

impl Escaper for HtmlEscaper {
    fn escape(&self, text: &str) -> String {
        escape_html(text)
    }
}

/// Escape `text` with [`HtmlEscaper`] rules.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&#34;"),
            '\'' => result.push_str("&#39;"),
            '\0' => result.push('\u{FFFD}'),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&#34;x&#34;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_markers_untouched() {
        let text = "% item\n# item\n; term : def\n$ quote\n==Title==";
        assert_eq!(HtmlEscaper.escape(text), text);
    }

    #[test]
    fn test_nul() {
        assert_eq!(escape_html("a\0b"), "a\u{FFFD}b");
    }
}
