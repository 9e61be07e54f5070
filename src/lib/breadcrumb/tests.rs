use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};

use super::*;
use crate::dom::Document;

fn page() -> Document {
    Document::parse("<nav class=\"breadcrumb\"><span>stale</span></nav>")
}

fn child_summaries(doc: &Document, container: crate::dom::NodeId) -> Vec<(String, String)> {
    doc.children(container)
        .to_vec()
        .into_iter()
        .map(|child| {
            let class = doc.attr(child, "class").unwrap_or_default().to_string();
            (class, doc.text_content(child))
        })
        .collect()
}

#[test]
fn trail_has_home_links_and_a_current_item() {
    let mut doc = page();
    BreadcrumbGenerator::new().generate(&mut doc, "/docs/api-reference.html");

    let root = doc.root();
    let container = doc.elements_with_class(root, "breadcrumb")[0];
    let summaries = child_summaries(&doc, container);
    assert_eq!(
        summaries,
        vec![
            ("breadcrumb-item".to_string(), "首页".to_string()),
            ("breadcrumb-separator".to_string(), "/".to_string()),
            ("breadcrumb-item".to_string(), "Docs".to_string()),
            ("breadcrumb-separator".to_string(), "/".to_string()),
            (
                "breadcrumb-item current".to_string(),
                "Api Reference.Html".to_string()
            ),
        ]
    );
}

#[test]
fn linked_items_carry_cumulative_hrefs() {
    let mut doc = page();
    BreadcrumbGenerator::new().generate(&mut doc, "/docs/guides/setup.html");

    let root = doc.root();
    let hrefs: Vec<&str> = doc
        .elements_with_tag(root, "a")
        .iter()
        .filter_map(|&a| doc.attr(a, "href"))
        .collect();
    assert_eq!(hrefs, vec!["/", "/docs", "/docs/guides"]);
}

#[test]
fn current_item_is_plain_text() {
    let mut doc = page();
    BreadcrumbGenerator::new().generate(&mut doc, "/docs/setup.html");

    let root = doc.root();
    let current = doc.elements_with_class(root, "current")[0];
    assert!(doc.elements_with_tag(current, "a").is_empty());
    assert_eq!(doc.text_content(current), "Setup.Html");
}

#[test]
fn root_path_leaves_only_the_home_item() {
    let mut doc = page();
    BreadcrumbGenerator::new().generate(&mut doc, "/");

    let root = doc.root();
    let container = doc.elements_with_class(root, "breadcrumb")[0];
    let summaries = child_summaries(&doc, container);
    assert_eq!(
        summaries,
        vec![
            ("breadcrumb-item".to_string(), "首页".to_string()),
            ("breadcrumb-separator".to_string(), "/".to_string()),
        ]
    );
    assert!(doc.elements_with_class(container, "current").is_empty());
}

#[test]
fn regenerating_replaces_the_old_trail() {
    let mut doc = page();
    let generator = BreadcrumbGenerator::new();
    generator.generate(&mut doc, "/docs/a.html");
    generator.generate(&mut doc, "/b.html");

    let root = doc.root();
    let container = doc.elements_with_class(root, "breadcrumb")[0];
    let text = doc.text_content(container);
    assert!(!text.contains('A'));
    assert!(!text.contains("stale"));
    assert_eq!(doc.elements_with_class(container, "current").len(), 1);
}

#[test]
fn missing_container_is_a_no_op() {
    let mut doc = Document::parse("<main><p>body</p></main>");
    let before = doc.inner_html(doc.root());
    BreadcrumbGenerator::new().generate(&mut doc, "/docs/a.html");
    assert_eq!(doc.inner_html(doc.root()), before);
}

#[test]
fn custom_options_change_every_piece() {
    let mut doc = Document::parse("<nav class=\"crumbs\"></nav>");
    let generator = BreadcrumbGenerator::with_options(BreadcrumbOptions {
        container_class: "crumbs".to_string(),
        separator: "›".to_string(),
        home_text: "Home".to_string(),
        home_url: "/index.html".to_string(),
    });
    generator.generate(&mut doc, "/docs");

    let root = doc.root();
    let container = doc.elements_with_class(root, "crumbs")[0];
    let home_link = doc.elements_with_tag(container, "a")[0];
    assert_eq!(doc.attr(home_link, "href").as_deref(), Some("/index.html"));
    assert_eq!(doc.text_content(home_link), "Home");

    let separator = doc.elements_with_class(container, "breadcrumb-separator")[0];
    assert_eq!(doc.text_content(separator), "›");
}

#[test]
fn segments_format_as_spaced_title_case() {
    assert_eq!(format_segment("api-reference"), "Api Reference");
    assert_eq!(format_segment("getting-started.html"), "Getting Started.Html");
    assert_eq!(format_segment("v2-endpoints"), "V2 Endpoints");
    assert_eq!(format_segment("_internal"), "_internal");
    assert_eq!(format_segment("中文"), "中文");
}

#[test]
fn item_count_tracks_segment_count() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(
            &proptest::collection::vec("[a-z]{1,8}", 1..6),
            |segments| {
                let mut doc = page();
                let path = format!("/{}", segments.join("/"));
                BreadcrumbGenerator::new().generate(&mut doc, &path);

                let root = doc.root();
                let container = doc.elements_with_class(root, "breadcrumb")[0];
                let items = doc.elements_with_class(container, "breadcrumb-item");
                let separators = doc.elements_with_class(container, "breadcrumb-separator");
                prop_assert_eq!(items.len(), segments.len() + 1);
                prop_assert_eq!(separators.len(), segments.len());
                Ok(())
            },
        )
        .unwrap();
}
