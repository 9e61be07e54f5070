//! Shared data types for page rendering and enhancement.
//! Implemented as newtypes to enforce invariants.

use std::{
    fmt,
    path::{Path, PathBuf},
};

/// A percentage clamped to `0.0..=100.0`, as used for progress widths.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Percent(f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);
    pub const FULL: Percent = Percent(100.0);

    /// Clamp an arbitrary value into range. NaN collapses to zero.
    pub fn clamp(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(0.0, 100.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// CSS width declaration for this percentage.
    pub fn css_width(self) -> String {
        format!("{}%", self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Relative paths to internal content or assets.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelPath(PathBuf);

impl RelPath {
    pub fn new(p: PathBuf) -> Option<Self> {
        if p.is_absolute() { None } else { Some(Self(p)) }
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Href(String);

impl Href {
    pub fn new(href: impl Into<String>) -> Self {
        Self(href.into())
    }

    pub fn from_rel(rel: &RelPath) -> Self {
        let s = rel.as_path().to_string_lossy().replace('\\', "/");
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Href {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
