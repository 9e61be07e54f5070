use std::time::Duration;

pub const INPUT_DIR: &str = "pages";
pub const OUTPUT_DIR: &str = "public";

// Site-wide metadata used in the page shell.
pub const SITE_TITLE: &str = "Pagekit";
pub const SITE_LANG: &str = "zh-CN";

// Scroll positions (px) at which header and back-to-top chrome switch state.
pub const HEADER_SCROLLED_AT: f64 = 100.0;
pub const BACK_TO_TOP_AT: f64 = 500.0;

// Section probing runs this many px ahead of the scroll position, and
// anchor jumps land this many px short of the target to clear the header.
pub const SECTION_PROBE_OFFSET: f64 = 100.0;
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;

// Viewport widths above this collapse the mobile nav state.
pub const NAV_COLLAPSE_WIDTH: f64 = 1024.0;

// Rate limiting windows for the event-driven entry points.
pub const SCROLL_THROTTLE: Duration = Duration::from_millis(16);
pub const RESIZE_THROTTLE: Duration = Duration::from_millis(250);
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);
