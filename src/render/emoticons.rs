//! Emoticon shortcodes to `<img>` tags.

const EMOTICON_PATH: &str = "/img/emoticons/";

/// Shortcodes and the image each maps to, in replacement order.
///
/// Longer tokens come before the shorter tokens they contain (`:DD` before
/// `:D`, `O:)` before `:)`).
pub const EMOTICONS: &[(&str, &str)] = &[
    (":angry:", "angry"),
    (":laugh:", "laugh"),
    (":DD", "laugh"),
    (":yell:", "yell"),
    (":innocent:", "innocent"),
    ("O:)", "innocent"),
    (":satisfied:", "satisfied"),
    ("/:D", "satisfied"),
    (":)", "smile"),
    (":O", "shocked"),
    (":(", "sad"),
    (":D", "biggrin"),
    (":P", "tongue"),
    (";)", "wink"),
    (":blush:", "blush"),
    (":\\", "blush"),
    (":confused:", "confused"),
    (":S", "confused"),
    (":cool:", "cool"),
    ("B)", "cool"),
    (":crazy:", "crazy"),
    (":cry:", "cry"),
    (":~(", "cry"),
    // Closed like the other named codes; a bare `:doze` is left as text.
    (":doze:", "doze"),
    (":?", "doze"),
    (":hehe:", "hehe"),
    ("XD", "hehe"),
    (":plain:", "plain"),
    (":|", "plain"),
    (":rolleyes:", "rolleyes"),
    ("9_9", "rolleyes"),
    (":dizzy:", "crazy"),
    ("o_O", "crazy"),
    (":money:", "money"),
    (":$", "money"),
    (":sealed:", "sealed"),
    (":X", "sealed"),
    (":eek:", "eek"),
    ("O_O", "eek"),
    (":kiss:", "kiss"),
    (":*", "kiss"),
];

/// Replace emoticon shortcodes with `<img src=/img/emoticons/<name>.gif>`.
///
/// Replacements are literal and sequential. Paragraph tags that were
/// HTML-escaped earlier (`&lt;p&gt;`, `&lt;/p&gt;`) are restored.
pub fn substitute_emoticons(text: &str) -> String {
    let mut result = text.to_string();

    for (token, name) in EMOTICONS {
        if result.contains(token) {
            result = result.replace(token, &emoticon_tag(name));
        }
    }

    result
        .replace("&lt;/p&gt;", "</p>")
        .replace("&lt;p&gt;", "<p>")
}

fn emoticon_tag(name: &str) -> String {
    format!("<img src={}{}.gif>", EMOTICON_PATH, name)
}
