//! Tabbed code examples.

use crate::dom::{Document, NodeId};

/// Tab labels and content panes collected from one `.code-example` container.
/// Labels and panes pair up by position.
pub struct TabSwitcher {
    tabs: Vec<NodeId>,
    contents: Vec<NodeId>,
}

impl TabSwitcher {
    pub fn new(doc: &Document, container: NodeId) -> Self {
        Self {
            tabs: doc.elements_with_class(container, "code-tab"),
            contents: doc.elements_with_class(container, "code-content"),
        }
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Activate tab `index`: it alone carries the `active` class and its pane
    /// alone is displayed. An index with no tab changes nothing; a tab
    /// without a matching pane hides every pane.
    pub fn switch_tab(&self, doc: &mut Document, index: usize) {
        let Some(&selected) = self.tabs.get(index) else {
            return;
        };
        for &tab in &self.tabs {
            doc.remove_class(tab, "active");
        }
        for &content in &self.contents {
            doc.set_style_prop(content, "display", "none");
        }
        doc.add_class(selected, "active");
        if let Some(&content) = self.contents.get(index) {
            doc.set_style_prop(content, "display", "block");
        }
    }
}

/// One switcher per `.code-example` container on the page.
pub fn switchers_for_page(doc: &Document) -> Vec<TabSwitcher> {
    let root = doc.root();
    doc.elements_with_class(root, "code-example")
        .into_iter()
        .map(|container| TabSwitcher::new(doc, container))
        .collect()
}

#[cfg(test)]
mod tests;
