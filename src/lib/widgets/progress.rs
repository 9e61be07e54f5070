//! Progress bars: the fixed reading-progress bar plus static skill bars
//! filled from their `data-progress` attribute.

use crate::dom::{Document, NodeId};
use crate::scroll;

pub struct ProgressOptions {
    pub container_class: String,
    pub color: String,
    pub height: String,
}

impl Default for ProgressOptions {
    fn default() -> Self {
        Self {
            container_class: "progress-container".to_string(),
            color: "#6366f1".to_string(),
            height: "3px".to_string(),
        }
    }
}

/// The reading-progress bar pinned to the top of the viewport.
pub struct ProgressIndicator {
    bar: NodeId,
}

impl ProgressIndicator {
    /// Create the bar and attach it inside the first `.progress-container`,
    /// or the body when the page has none.
    pub fn attach(doc: &mut Document) -> Self {
        Self::attach_with_options(doc, ProgressOptions::default())
    }

    pub fn attach_with_options(doc: &mut Document, options: ProgressOptions) -> Self {
        let root = doc.root();
        let container = doc
            .elements_with_class(root, &options.container_class)
            .first()
            .copied()
            .unwrap_or_else(|| doc.body());

        let bar = doc.create_element("div");
        doc.set_attr(bar, "class", "reading-progress");
        doc.set_attr(
            bar,
            "style",
            &format!(
                "position: fixed; top: 0; left: 0; width: 0%; height: {}; \
                 background-color: {}; z-index: 9999; transition: width 0.3s ease",
                options.height, options.color
            ),
        );
        doc.append_child(container, bar);
        Self { bar }
    }

    pub fn bar(&self) -> NodeId {
        self.bar
    }

    /// Recompute the bar width from the page geometry.
    pub fn update(
        &self,
        doc: &mut Document,
        scroll_top: f64,
        viewport_height: f64,
        content_height: f64,
    ) {
        let progress = scroll::reading_progress(scroll_top, viewport_height, content_height);
        doc.set_style_prop(self.bar, "width", &progress.css_width());
    }
}

/// Fill every `.progress-bar` to the width its `data-progress` attribute
/// names. The value lands in the style verbatim with a `%` appended.
pub fn apply_static_bars(doc: &mut Document) {
    let root = doc.root();
    let bars: Vec<NodeId> = doc
        .elements_with_class(root, "progress-bar")
        .into_iter()
        .filter(|&bar| doc.attr(bar, "data-progress").is_some())
        .collect();

    for bar in bars {
        let progress = doc
            .attr(bar, "data-progress")
            .unwrap_or_default()
            .to_string();
        doc.set_style_prop(bar, "width", &format!("{progress}%"));
    }
}
