//! Small stateful page widgets: tabbed code examples, the image lightbox,
//! modal dialogs and progress bars. Each one holds its own state and applies
//! changes to a [`crate::dom::Document`]; absent page elements make the
//! operations silent no-ops.

pub mod lightbox;
pub mod modal;
pub mod progress;
pub mod tabs;
