//! Search term highlighting over a document's text nodes.
//!
//! Matches are wrapped in `<mark class="search-highlight">` by rewriting
//! the parent's inner HTML with a first-occurrence string replace. That
//! replace is string surgery, not node surgery, and it carries two known
//! hazards that are part of the contract: when the same text appears
//! twice under one parent the first occurrence is the one rewritten,
//! whichever node actually matched; and text whose serialized form
//! differs from its raw form (`&`, `<`, `>`) is never found, so it is
//! silently left unhighlighted.
//!
//! The first rewrite under a parent snapshots that parent's previous
//! inner HTML. Rewrites also rebuild the parent's subtree, so later
//! candidates under the same parent go stale and are skipped.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::dom::{Document, NodeId};

pub const HIGHLIGHT_CLASS: &str = "search-highlight";

const SKIPPED_PARENTS: &[&str] = &["script", "style"];

/// Wraps search matches in `<mark>` elements and remembers what each
/// touched parent looked like beforehand.
pub struct SearchHighlighter {
    original_content: HashMap<NodeId, String>,
}

impl SearchHighlighter {
    pub fn new() -> Self {
        Self {
            original_content: HashMap::new(),
        }
    }

    /// Highlight every case-insensitive occurrence of the literal `query`
    /// in text under `container`. A blank query clears instead.
    pub fn highlight(&mut self, doc: &mut Document, query: &str, container: NodeId) {
        if query.trim().is_empty() {
            self.clear_highlights(doc, container);
            return;
        }

        let pattern = literal_pattern(query);
        let candidates: Vec<NodeId> = doc
            .text_nodes_under(container)
            .into_iter()
            .filter(|&node| {
                doc.parent(node)
                    .and_then(|p| doc.tag(p))
                    .is_none_or(|tag| !SKIPPED_PARENTS.contains(&tag))
            })
            .collect();
        debug!(query, candidates = candidates.len(), "highlighting");

        for node in candidates {
            // Earlier rewrites may have rebuilt this node's subtree.
            if !doc.is_attached_under(node, container) {
                continue;
            }
            let Some(parent) = doc.parent(node) else {
                continue;
            };
            let Some(content) = doc.text(node).map(str::to_owned) else {
                continue;
            };
            if !pattern.is_match(&content) {
                continue;
            }

            let wrapped = pattern
                .replace_all(
                    &content,
                    format!(r#"<mark class="{HIGHLIGHT_CLASS}">${{1}}</mark>"#),
                )
                .into_owned();

            self.original_content
                .entry(parent)
                .or_insert_with(|| doc.inner_html(parent));

            let rewritten = doc.inner_html(parent).replacen(&content, &wrapped, 1);
            doc.set_inner_html(parent, &rewritten);
        }
    }

    /// Unwrap every highlight under `container` back into plain text and
    /// forget all snapshots, including ones taken under other containers.
    pub fn clear_highlights(&mut self, doc: &mut Document, container: NodeId) {
        for mark in doc.elements_with_class(container, HIGHLIGHT_CLASS) {
            let text = doc.text_content(mark);
            let replacement = doc.create_text(&text);
            doc.replace_with(mark, replacement);
        }
        self.original_content.clear();
    }
}

impl Default for SearchHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

fn literal_pattern(query: &str) -> Regex {
    RegexBuilder::new(&format!("({})", regex::escape(query)))
        .case_insensitive(true)
        .build()
        .expect("escaped literal always compiles")
}
