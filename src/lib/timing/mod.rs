//! Rate limiting for event-driven entry points.
//!
//! The scroll and resize handlers run behind a [`Throttle`], the search
//! box behind a [`Debounce`]. Both are pure state machines over caller
//! supplied timestamps so they can be driven from any event loop.

use std::time::{Duration, Instant};

use crate::config;

/// Leading-edge throttle: the first call in a window runs, the rest are
/// dropped until the window has elapsed.
#[derive(Debug)]
pub struct Throttle {
    window: Duration,
    open_at: Option<Instant>,
}

impl Throttle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            open_at: None,
        }
    }

    /// Throttle sized for scroll handlers.
    pub fn for_scroll() -> Self {
        Self::new(config::SCROLL_THROTTLE)
    }

    /// Throttle sized for resize handlers.
    pub fn for_resize() -> Self {
        Self::new(config::RESIZE_THROTTLE)
    }

    /// Whether a call arriving at `now` should run.
    pub fn admit(&mut self, now: Instant) -> bool {
        match self.open_at {
            Some(open_at) if now < open_at => false,
            _ => {
                self.open_at = Some(now + self.window);
                true
            }
        }
    }
}

/// Trailing-edge debounce: the action runs once the input has been quiet
/// for the full wait.
#[derive(Debug)]
pub struct Debounce {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debounce {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Debounce sized for the search box.
    pub fn for_search() -> Self {
        Self::new(config::SEARCH_DEBOUNCE)
    }

    /// Record an input event at `now`, pushing the deadline back.
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Whether the debounced action should fire at `now`. Firing consumes
    /// the pending deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
