use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};

use super::*;
use crate::dom::Document;

fn block(doc: &Document) -> NodeId {
    let root = doc.root();
    doc.elements_with_tag(root, "code")[0]
}

#[test]
fn rust_blocks_gain_classed_spans() {
    let mut doc =
        Document::parse("<pre><code class=\"language-rust\">fn main() {}</code></pre>");
    highlight_code_blocks(&mut doc);

    let code = block(&doc);
    let markup = doc.inner_html(code);
    assert!(markup.contains("<span"));
    assert!(markup.contains("source rust"));
    assert_eq!(doc.text_content(code), "fn main() {}");
}

#[test]
fn unknown_language_highlights_as_plain_text() {
    let mut doc =
        Document::parse("<pre><code class=\"language-nosuchlang\">let x = 1</code></pre>");
    highlight_code_blocks(&mut doc);

    let code = block(&doc);
    assert!(doc.inner_html(code).contains("<span"));
    assert_eq!(doc.text_content(code), "let x = 1");
}

#[test]
fn missing_language_class_still_highlights() {
    let mut doc = Document::parse("<pre><code>plain text here</code></pre>");
    highlight_code_blocks(&mut doc);

    let code = block(&doc);
    assert!(doc.inner_html(code).contains("<span"));
    assert_eq!(doc.text_content(code), "plain text here");
}

#[test]
fn inline_code_outside_pre_is_untouched() {
    let mut doc = Document::parse("<p>call <code>render()</code> twice</p>");
    let before = doc.inner_html(doc.root());
    highlight_code_blocks(&mut doc);
    assert_eq!(doc.inner_html(doc.root()), before);
}

#[test]
fn markup_inside_a_block_is_flattened_to_its_text() {
    let mut doc =
        Document::parse("<pre><code class=\"language-rust\">a<b>bold</b>c</code></pre>");
    highlight_code_blocks(&mut doc);

    let code = block(&doc);
    assert!(doc.elements_with_tag(code, "b").is_empty());
    assert_eq!(doc.text_content(code), "aboldc");
}

#[test]
fn highlight_css_is_produced_once() {
    let css = highlight_css();
    assert!(!css.is_empty());
    assert!(css.contains("color"));
    assert_eq!(highlight_css(), css);
}

#[test]
fn highlighting_preserves_block_text() {
    let mut runner = TestRunner::new(Config {
        cases: 8,
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |body| {
            let mut doc = Document::new();
            let root = doc.root();
            let pre = doc.create_element("pre");
            let code = doc.create_element("code");
            doc.set_attr(code, "class", "language-rust");
            doc.set_text(code, &body);
            doc.append_child(pre, code);
            doc.append_child(root, pre);

            highlight_code_blocks(&mut doc);
            prop_assert_eq!(doc.text_content(code), body);
            Ok(())
        })
        .unwrap();
}
