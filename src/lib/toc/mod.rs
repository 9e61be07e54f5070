//! Table-of-contents generation for documentation pages.
//!
//! Headings inside the content container get stable `heading-{index}`
//! ids (existing ids are kept), and a nested list of links is appended
//! to the TOC container.

use crate::dom::{Document, NodeId};

pub struct TocOptions {
    /// Class of the element holding the page content.
    pub content_class: String,
    /// Class of the element the list is appended to.
    pub toc_class: String,
    /// Heading tags collected, in document order.
    pub heading_tags: Vec<String>,
}

impl Default for TocOptions {
    fn default() -> Self {
        Self {
            content_class: "doc-content".to_string(),
            toc_class: "toc".to_string(),
            heading_tags: vec!["h2".to_string(), "h3".to_string(), "h4".to_string()],
        }
    }
}

pub struct TocGenerator {
    options: TocOptions,
}

impl TocGenerator {
    pub fn new() -> Self {
        Self {
            options: TocOptions::default(),
        }
    }

    pub fn with_options(options: TocOptions) -> Self {
        Self { options }
    }

    /// Build the TOC. Does nothing when either container is missing or
    /// the content has no headings.
    pub fn generate(&self, doc: &mut Document) {
        let root = doc.root();
        let Some(container) = doc
            .elements_with_class(root, &self.options.content_class)
            .first()
            .copied()
        else {
            return;
        };
        let Some(toc_container) = doc
            .elements_with_class(root, &self.options.toc_class)
            .first()
            .copied()
        else {
            return;
        };

        let headings: Vec<NodeId> = doc
            .descendants(container)
            .into_iter()
            .filter(|&node| {
                doc.tag(node)
                    .is_some_and(|tag| self.options.heading_tags.iter().any(|h| h == tag))
            })
            .collect();
        if headings.is_empty() {
            return;
        }

        let toc_list = doc.create_element("ul");
        doc.set_attr(toc_list, "class", "toc-list");

        for (index, &heading) in headings.iter().enumerate() {
            if doc.attr(heading, "id").is_none_or(str::is_empty) {
                doc.set_attr(heading, "id", &format!("heading-{index}"));
            }
            let id = doc
                .attr(heading, "id")
                .unwrap_or_default()
                .to_string();
            let tag = doc.tag(heading).unwrap_or_default().to_string();
            let label = doc.text_content(heading);

            let item = doc.create_element("li");
            doc.set_attr(item, "class", &format!("toc-item level-{tag}"));

            let link = doc.create_element("a");
            doc.set_attr(link, "class", "toc-link");
            doc.set_attr(link, "href", &format!("#{id}"));
            doc.set_text(link, &label);

            doc.append_child(item, link);
            doc.append_child(toc_list, item);
        }

        doc.append_child(toc_container, toc_list);
    }
}

impl Default for TocGenerator {
    fn default() -> Self {
        Self::new()
    }
}
