//! Headless page behavior for a documentation site.
//!
//! Everything the site does in front of a reader is modelled here as plain
//! data transformations: a regex-driven markdown renderer, an arena-backed
//! element tree standing in for the browser DOM, search highlighting, TOC
//! and breadcrumb generation, scroll chrome, and the small widget state
//! machines (tabs, lightbox, modals, progress bars). The [`pipeline`]
//! module drives all of it over a directory of source pages and emits the
//! enhanced HTML.
//!
//! Modules:
//!
//! - [`dom`]: element/text tree with `innerHTML`-style parse and serialize
//! - [`markdown`]: ordered rewrite rules for the markdown subset
//! - [`highlight`]: search term highlighting over text nodes
//! - [`toc`] / [`breadcrumb`]: navigation generators
//! - [`scroll`] / [`timing`]: scroll chrome math and rate limiting
//! - [`widgets`]: tabs, lightbox, modal, progress bars
//! - [`search`] / [`lang`] / [`form`]: page-level helpers
//! - [`code`]: class-based syntax highlighting for code blocks
//! - [`pipeline`]: discover, parse, enhance, emit

pub mod breadcrumb;
pub mod code;
pub mod config;
pub mod dom;
pub mod form;
pub mod highlight;
pub mod lang;
pub mod markdown;
pub mod pipeline;
pub mod scroll;
pub mod search;
pub mod templates;
pub mod timing;
pub mod toc;
pub mod types;
pub mod utils;
pub mod widgets;
