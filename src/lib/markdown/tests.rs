use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::render;

#[test]
fn headings_map_by_level() {
    assert_eq!(render("# Title"), "<p><h1>Title</h1></p>");
    assert_eq!(render("## Sub"), "<p><h2>Sub</h2></p>");
    assert_eq!(render("### Minor"), "<p><h3>Minor</h3></p>");
}

#[test]
fn headings_match_per_line() {
    let out = render("# A\nbody\n## B");
    assert_eq!(out, "<p><h1>A</h1>\nbody\n<h2>B</h2></p>");
}

#[test]
fn four_hashes_are_not_a_heading() {
    assert_eq!(render("#### deep"), "<p>#### deep</p>");
}

#[test]
fn inline_rules_run_inside_headings() {
    assert_eq!(
        render("# A **b**"),
        "<p><h1>A <strong>b</strong></h1></p>"
    );
}

#[test]
fn emphasis_nests_through_rule_order() {
    assert_eq!(render("***x***"), "<p><strong><em>x</em></strong></p>");
    assert_eq!(render("*x*"), "<p><em>x</em></p>");
}

// Greedy spans are part of the contract: separate runs on one line merge,
// and the leftover asterisks cascade into the emphasis rule.
#[test]
fn bold_runs_merge_greedily() {
    assert_eq!(
        render("**a** and **b**"),
        "<p><strong>a<em>* and *</em>b</strong></p>"
    );
}

#[test]
fn code_spans_are_lazy() {
    assert_eq!(
        render("`a` and `b`"),
        "<p><code>a</code> and <code>b</code></p>"
    );
}

#[test]
fn links_rewrite_href_and_label() {
    assert_eq!(
        render("[docs](https://example.com/a)"),
        r#"<p><a href="https://example.com/a">docs</a></p>"#
    );
    assert_eq!(render("[missing paren](https://x"), "<p>[missing paren](https://x</p>");
}

#[test]
fn unmatched_markers_pass_through() {
    assert_eq!(render("`dangling"), "<p>`dangling</p>");
    assert_eq!(render("*dangling"), "<p>*dangling</p>");
    // A double marker still satisfies the emphasis rule with an empty span.
    assert_eq!(render("**dangling"), "<p><em></em>dangling</p>");
}

#[test]
fn blank_lines_split_paragraphs() {
    assert_eq!(render("a\n\nb"), "<p>a</p><p>b</p>");
    assert_eq!(render("a\n\n\nb"), "<p>a</p><p>\nb</p>");
    assert_eq!(render("a\nb"), "<p>a\nb</p>");
}

#[test]
fn raw_html_passes_through() {
    assert_eq!(
        render(r#"<div class="x">kept</div>"#),
        r#"<p><div class="x">kept</div></p>"#
    );
}

#[test]
fn plain_text_is_only_wrapped() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&"[A-Za-z0-9 ,.!?]{0,60}", |line| {
            prop_assert_eq!(render(&line), format!("<p>{line}</p>"));
            Ok(())
        })
        .unwrap();
}

#[test]
fn output_is_always_a_paragraph_block() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&".*", |input| {
            let out = render(&input);
            prop_assert!(out.starts_with("<p>"));
            prop_assert!(out.ends_with("</p>"));
            Ok(())
        })
        .unwrap();
}
