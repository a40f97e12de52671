//! Integration tests for the rendering pipeline.

use std::fs;
use std::sync::Arc;

use wikidown::render::{result_to_json, toc_to_json, JsonFormat};
use wikidown::{MemoryThumbnailStore, RenderOptions, TableOfContents, Wikidown};

fn wikidown() -> Wikidown {
    Wikidown::new().with_store(Arc::new(MemoryThumbnailStore::new()))
}

#[test]
fn test_full_page() {
    let page = "== Intro ==\nSome ''text'' here\n=== Scope ===\n* one\n* two\nOutro";
    let result = wikidown().render(page);

    assert_eq!(
        result.html,
        concat!(
            "<h2 id=\"Intro\">Intro</h2>\n",
            "<p>Some <i>text</i> here\n",
            "<h3 id=\"Scope\">Scope</h3>\n",
            "<p><ul><li> one</li>\n",
            "<p><li> two</li></ul>\n",
            "<p>Outro"
        )
    );
    assert_eq!(result.toc.to_nested(), vec![vec!["Intro", "Scope"]]);
    assert_eq!(result.stats.heading_count, 2);
    assert_eq!(result.stats.list_item_count, 2);
}

#[test]
fn test_user_html_is_escaped() {
    let result = wikidown().render("<b onclick=\"x\">hi</b>");
    assert_eq!(
        result.html,
        "&lt;b onclick=&#34;x&#34;&gt;hi&lt;/b&gt;"
    );
}

#[test]
fn test_description_list() {
    let result = wikidown().render(";Rust\n:A language\n:With traits");
    assert_eq!(
        result.html,
        "<dl><dt>Rust</dt>\n<p><dd>A language</dd>\n<p><dd>With traits</dd></dl>"
    );
}

#[test]
fn test_multiple_sections() {
    let page = "==One==\n===1a===\n===1b===\n==Two==\n==Three==\n===3a===";
    let result = wikidown().render(page);

    assert_eq!(
        result.toc.to_nested(),
        vec![vec!["One", "1a", "1b"], vec!["Two"], vec!["Three", "3a"]]
    );
    assert_eq!(result.stats.section_count, 3);
    assert_eq!(result.stats.subsection_count, 3);
}

#[test]
fn test_comparison_operator_in_prose() {
    let result = wikidown().render("==Intro==\nif a == b\n==Next==");

    assert_eq!(result.toc.to_nested(), vec![vec!["Intro"], vec!["Next"]]);
    assert_eq!(
        result.html,
        "<h2 id=\"Intro\">Intro</h2>\n<p>if a == b\n<h2 id=\"Next\">Next</h2>"
    );
}

#[test]
fn test_toc_json() {
    let result = wikidown().render("== A ==\n=== A1 ===\n== B ==");
    let json = toc_to_json(&result.toc, JsonFormat::Compact).unwrap();
    assert_eq!(json, r#"[["A","A1"],["B"]]"#);
}

#[test]
fn test_toc_json_roundtrip_rejects_empty_section() {
    let toc: TableOfContents = serde_json::from_str(r#"[["A","A1"],["B"]]"#).unwrap();
    assert_eq!(toc.len(), 2);
    assert_eq!(toc.subsection_count(), 1);

    assert!(serde_json::from_str::<TableOfContents>("[[]]").is_err());
}

#[test]
fn test_result_json() {
    let result = wikidown().render("==A==");
    let json = result_to_json(&result, JsonFormat::Compact).unwrap();
    assert!(json.contains(r#""toc":[["A"]]"#));
    assert!(json.contains(r#""section_count":1"#));
}

#[test]
fn test_emoticons_enabled() {
    let result = wikidown().with_emoticons().render("great :D");
    assert_eq!(result.html, "great <img src=/img/emoticons/biggrin.gif>");
}

#[test]
fn test_emoticons_idempotent() {
    let once = wikidown::substitute_emoticons("a :) b ;) c :DD d O:)");
    let twice = wikidown::substitute_emoticons(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_render_with_options() {
    let options = RenderOptions::new().with_thumbnails(false);
    let result = wikidown::render_with_options("[[File:a b.png|thumb|cap]]", &options);
    assert!(result
        .html
        .starts_with(r#"<div class="thumb right"><a href="/img/a_b.png">"#));
    assert!(result.html.ends_with("<figcaption>a b</figcaption></div>"));
}

#[test]
fn test_render_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("entry.wiki");
    fs::write(&path, "==Links==\nSee [[Home]] and https://example.com/about\n").unwrap();

    let result = wikidown()
        .with_image_root(dir.path())
        .render_file(&path)
        .unwrap();

    assert_eq!(result.toc.to_nested(), vec![vec!["Links"]]);
    assert!(result.html.contains(r#"<a href="/entries/Home">Home</a>"#));
    assert!(result.html.contains(
        r#"<a class="external" href="https://example.com/about">https://example.com/about</a>"#
    ));
}
