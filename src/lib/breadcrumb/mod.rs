//! Breadcrumb trail built from a page's path.
//!
//! The container is emptied and refilled: a home link first, then one
//! item per path segment with cumulative hrefs. The last segment is the
//! current page and renders as plain text; every linked item is followed
//! by a separator.

use itertools::{Itertools, Position};

use crate::dom::{Document, NodeId};

pub struct BreadcrumbOptions {
    pub container_class: String,
    pub separator: String,
    pub home_text: String,
    pub home_url: String,
}

impl Default for BreadcrumbOptions {
    fn default() -> Self {
        Self {
            container_class: "breadcrumb".to_string(),
            separator: "/".to_string(),
            home_text: "首页".to_string(),
            home_url: "/".to_string(),
        }
    }
}

pub struct BreadcrumbGenerator {
    options: BreadcrumbOptions,
}

impl BreadcrumbGenerator {
    pub fn new() -> Self {
        Self {
            options: BreadcrumbOptions::default(),
        }
    }

    pub fn with_options(options: BreadcrumbOptions) -> Self {
        Self { options }
    }

    /// Rebuild the trail for `path` (a `/`-separated page path). Does
    /// nothing when the container is missing.
    pub fn generate(&self, doc: &mut Document, path: &str) {
        let root = doc.root();
        let Some(container) = doc
            .elements_with_class(root, &self.options.container_class)
            .first()
            .copied()
        else {
            return;
        };

        doc.clear_children(container);
        self.add_item(doc, container, &self.options.home_text, &self.options.home_url);

        let mut current_path = String::new();
        for (position, segment) in path.split('/').filter(|s| !s.is_empty()).with_position() {
            current_path.push('/');
            current_path.push_str(segment);
            let text = format_segment(segment);
            match position {
                Position::Last | Position::Only => {
                    self.add_current(doc, container, &text);
                }
                Position::First | Position::Middle => {
                    self.add_item(doc, container, &text, &current_path);
                }
            }
        }
    }

    fn add_item(&self, doc: &mut Document, container: NodeId, text: &str, url: &str) {
        let item = doc.create_element("span");
        doc.set_attr(item, "class", "breadcrumb-item");

        let link = doc.create_element("a");
        doc.set_attr(link, "href", url);
        doc.set_text(link, text);
        doc.append_child(item, link);
        doc.append_child(container, item);

        let separator = doc.create_element("span");
        doc.set_attr(separator, "class", "breadcrumb-separator");
        doc.set_text(separator, &self.options.separator);
        doc.append_child(container, separator);
    }

    fn add_current(&self, doc: &mut Document, container: NodeId, text: &str) {
        let item = doc.create_element("span");
        doc.set_attr(item, "class", "breadcrumb-item current");
        doc.set_text(item, text);
        doc.append_child(container, item);
    }
}

impl Default for BreadcrumbGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Hyphens become spaces and every word-initial ASCII letter or digit is
/// uppercased, so `api-reference.html` reads `Api Reference.Html`.
pub fn format_segment(segment: &str) -> String {
    let spaced = segment.replace('-', " ");
    let mut out = String::with_capacity(spaced.len());
    let mut prev_is_word = false;
    for ch in spaced.chars() {
        let is_word = ch.is_ascii_alphanumeric() || ch == '_';
        if is_word && !prev_is_word {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push(ch);
        }
        prev_is_word = is_word;
    }
    out
}

#[cfg(test)]
mod tests;
