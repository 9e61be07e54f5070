//! Image lightbox state.
//!
//! The lightbox itself is pure state over the page's eligible image sources;
//! rendering the overlay is the host page's concern. Navigation wraps at both
//! ends and the keyboard only reaches an open lightbox.

use crate::dom::Document;

const ELIGIBLE_CLASSES: [&str; 2] = ["responsive-image", "gallery-image"];

#[derive(Debug, Default)]
pub struct Lightbox {
    images: Vec<String>,
    current: usize,
    active: bool,
}

impl Lightbox {
    /// Collect the page's eligible image sources in document order.
    pub fn from_document(doc: &Document) -> Self {
        let root = doc.root();
        let images = doc
            .descendants(root)
            .into_iter()
            .filter(|&node| {
                ELIGIBLE_CLASSES
                    .iter()
                    .any(|class| doc.has_class(node, class))
            })
            .map(|node| doc.attr(node, "src").unwrap_or_default().to_string())
            .collect();
        Self {
            images,
            current: 0,
            active: false,
        }
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Source of the image the lightbox is pointing at, if it has any.
    pub fn current_src(&self) -> Option<&str> {
        self.images.get(self.current).map(String::as_str)
    }

    /// Open at image `index`. An index with no image changes nothing.
    pub fn open_at(&mut self, index: usize) {
        if index >= self.images.len() {
            return;
        }
        self.current = index;
        self.active = true;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn next(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current = (self.current + 1) % self.images.len();
    }

    pub fn previous(&mut self) {
        if self.images.is_empty() {
            return;
        }
        self.current = (self.current + self.images.len() - 1) % self.images.len();
    }

    /// Route a DOM key name to the lightbox. Ignored while closed; unknown
    /// keys are ignored always.
    pub fn handle_key(&mut self, key: &str) {
        if !self.active {
            return;
        }
        match key {
            "Escape" => self.close(),
            "ArrowLeft" => self.previous(),
            "ArrowRight" => self.next(),
            _ => {}
        }
    }
}
