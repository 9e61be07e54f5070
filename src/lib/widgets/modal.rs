//! Modal dialogs.
//!
//! A modal is open while it carries the `active` class; the page body mirrors
//! that with `modal-open`. Triggers are elements whose `data-modal` attribute
//! names the id of the modal they open.

use crate::dom::{Document, NodeId};

/// Open the modal with id `modal_id`, if the page has one.
pub fn open_modal(doc: &mut Document, modal_id: &str) {
    let Some(modal) = doc.element_by_id(modal_id) else {
        return;
    };
    doc.add_class(modal, "active");
    let body = doc.body();
    doc.add_class(body, "modal-open");
}

/// Close `modal`. The body's `modal-open` goes away with it, whatever other
/// modals are doing.
pub fn close_modal(doc: &mut Document, modal: NodeId) {
    doc.remove_class(modal, "active");
    let body = doc.body();
    doc.remove_class(body, "modal-open");
}

/// Close the first open modal on the page, as the Escape key does.
pub fn close_active_modal(doc: &mut Document) {
    let root = doc.root();
    let Some(active) = doc
        .elements_with_class(root, "modal")
        .into_iter()
        .find(|&modal| doc.has_class(modal, "active"))
    else {
        return;
    };
    close_modal(doc, active);
}

/// Every trigger on the page paired with the modal id it opens.
pub fn modal_triggers(doc: &Document) -> Vec<(NodeId, String)> {
    let root = doc.root();
    doc.elements_with_attr(root, "data-modal")
        .into_iter()
        .filter_map(|node| {
            let id = doc.attr(node, "data-modal")?.to_string();
            Some((node, id))
        })
        .collect()
}
