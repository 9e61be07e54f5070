use proptest::prelude::*;
use proptest::test_runner::{Config, TestRunner};

use super::*;

#[test]
fn blank_queries_return_nothing() {
    let index = SearchIndex::site_default();
    assert!(index.search("").is_empty());
    assert!(index.search("   ").is_empty());
    assert!(index.search("\t\n").is_empty());
}

#[test]
fn titles_match_case_insensitively() {
    let index = SearchIndex::site_default();
    let results = index.search("api");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "API 参考");
}

#[test]
fn descriptions_match_too() {
    let index = SearchIndex::site_default();
    let results = index.search("部署");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "常见问题");
}

#[test]
fn query_whitespace_is_part_of_the_match() {
    let index = SearchIndex::site_default();
    assert_eq!(index.search("api ").len(), 1);
    assert!(index.search(" api").is_empty());
}

#[test]
fn broad_queries_return_every_hit_in_table_order() {
    let index = SearchIndex::site_default();
    let titles: Vec<_> = index.search("使用").iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["常见问题", "插件使用指南"]);
}

#[test]
fn unmatched_queries_return_nothing() {
    let index = SearchIndex::site_default();
    assert!(index.search("quantum").is_empty());
}

#[test]
fn custom_tables_are_searched_like_the_default() {
    let index = SearchIndex::new(vec![
        PageDescriptor::new("Alpha", "/a.html", "first page"),
        PageDescriptor::new("Beta", "/b.html", "second page"),
    ]);
    let results = index.search("PAGE");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].href, Href::new("/a.html"));
}

#[test]
fn every_result_actually_contains_the_query() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    let index = SearchIndex::site_default();
    runner
        .run(&"[a-zA-Z 参考指南]{1,8}", |query| {
            let needle = query.to_lowercase();
            for page in index.search(&query) {
                prop_assert!(
                    page.title.to_lowercase().contains(&needle)
                        || page.description.to_lowercase().contains(&needle)
                );
            }
            Ok(())
        })
        .unwrap();
}
