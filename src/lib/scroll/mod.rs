//! Scroll-driven page chrome.
//!
//! The geometry (scroll offset, viewport size, section positions) comes from
//! the caller; this module turns it into states and applies them to a page:
//! the header's scrolled look, the back-to-top button, the reading-progress
//! width and the active nav link.

use crate::config;
use crate::dom::Document;
use crate::types::Percent;

/// A page section eligible for nav tracking, with its layout geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// How far through the scrollable range the reader is. A page shorter than
/// the viewport has no scrollable range and reports zero.
pub fn reading_progress(scroll_top: f64, viewport_height: f64, content_height: f64) -> Percent {
    let max_scroll = content_height - viewport_height;
    if max_scroll <= 0.0 {
        return Percent::ZERO;
    }
    Percent::clamp(scroll_top / max_scroll * 100.0)
}

pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > config::HEADER_SCROLLED_AT
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > config::BACK_TO_TOP_AT
}

/// The section whose probe window contains `scroll_y`. Windows start
/// [`config::SECTION_PROBE_OFFSET`] px above the section and overlap resolves
/// to the later section in document order.
pub fn active_section(scroll_y: f64, sections: &[Section]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        let window_top = section.top - config::SECTION_PROBE_OFFSET;
        if scroll_y >= window_top && scroll_y < window_top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Scroll destination for an in-page anchor, landing short of the element so
/// the fixed header does not cover it.
pub fn anchor_target(element_top: f64) -> f64 {
    element_top - config::ANCHOR_SCROLL_OFFSET
}

pub fn nav_collapses(viewport_width: f64) -> bool {
    viewport_width > config::NAV_COLLAPSE_WIDTH
}

pub fn apply_header_state(doc: &mut Document, scroll_y: f64) {
    let root = doc.root();
    let Some(header) = doc.elements_with_class(root, "header").first().copied() else {
        return;
    };
    if header_scrolled(scroll_y) {
        doc.add_class(header, "scrolled");
    } else {
        doc.remove_class(header, "scrolled");
    }
}

pub fn apply_back_to_top(doc: &mut Document, scroll_y: f64) {
    let Some(button) = doc.element_by_id("back-to-top") else {
        return;
    };
    if back_to_top_visible(scroll_y) {
        doc.add_class(button, "visible");
    } else {
        doc.remove_class(button, "visible");
    }
}

/// Mark the nav link pointing at the active section. With no active section
/// the target href degrades to a bare `#`, so only a link carrying exactly
/// that href stays active.
pub fn apply_active_nav(doc: &mut Document, scroll_y: f64, sections: &[Section]) {
    let target = format!("#{}", active_section(scroll_y, sections).unwrap_or(""));
    let root = doc.root();
    let links: Vec<_> = doc
        .elements_with_class(root, "nav-link")
        .into_iter()
        .filter(|&link| {
            doc.attr(link, "href")
                .is_some_and(|href| href.starts_with('#'))
        })
        .collect();
    for link in links {
        doc.remove_class(link, "active");
        if doc.attr(link, "href").as_deref() == Some(&target) {
            doc.add_class(link, "active");
        }
    }
}

/// Reset the mobile nav once the viewport is wide enough for the full menu.
pub fn collapse_nav_if_wide(doc: &mut Document, viewport_width: f64) {
    if !nav_collapses(viewport_width) {
        return;
    }
    let Some(menu) = doc.element_by_id("nav-menu") else {
        return;
    };
    doc.remove_class(menu, "active");
    let body = doc.body();
    doc.remove_class(body, "nav-open");
}
