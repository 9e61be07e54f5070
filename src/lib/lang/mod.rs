//! Language preference for the two-tree site layout.
//!
//! The Chinese pages live at the site root and the English pages under
//! `en/`. Switching updates the visible label, persists the choice as a
//! single file and reports the relative redirect that moves the reader onto
//! the right tree.

use std::fs;
use std::path::PathBuf;

use color_eyre::{Section, eyre::eyre};

use crate::dom::Document;

pub const PREFERENCE_KEY: &str = "preferred-language";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    Zh,
    En,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }

    /// The label the switcher button shows for this language.
    pub fn label(self) -> &'static str {
        match self {
            Self::Zh => "中文",
            Self::En => "English",
        }
    }
}

impl TryFrom<&str> for Language {
    type Error = color_eyre::Report;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "zh" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            other => Err(eyre!("Unknown language code: {other:?}")),
        }
    }
}

/// Relative redirect that moves `path` onto the tree for `lang`, or `None`
/// when the page is already on it.
pub fn redirect_for(path: &str, lang: Language) -> Option<&'static str> {
    match lang {
        Language::En if !path.contains("/en/") => Some("./en/index.html"),
        Language::Zh if path.contains("/en/") => Some("../index.html"),
        _ => None,
    }
}

/// Persists the preferred language as one file named [`PREFERENCE_KEY`]
/// under a caller-chosen directory.
pub struct PreferenceStore {
    dir: PathBuf,
}

impl PreferenceStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(PREFERENCE_KEY)
    }

    pub fn save(&self, lang: Language) -> color_eyre::Result<()> {
        fs::write(self.path(), lang.as_str())
            .with_note(|| format!("While saving the language preference to {:?}", self.path()))?;
        Ok(())
    }

    /// The stored preference, if a readable one exists.
    pub fn load(&self) -> Option<Language> {
        let stored = fs::read_to_string(self.path()).ok()?;
        Language::try_from(stored.trim()).ok()
    }
}

pub struct LanguageSwitcher {
    current: Language,
    store: PreferenceStore,
}

impl LanguageSwitcher {
    pub fn new(store: PreferenceStore) -> Self {
        Self {
            current: Language::default(),
            store,
        }
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Switch to `lang`: update the `current-lang` label on the page,
    /// persist the choice, and return the redirect for a page at `path`.
    pub fn switch_to(
        &mut self,
        doc: &mut Document,
        path: &str,
        lang: Language,
    ) -> color_eyre::Result<Option<&'static str>> {
        self.current = lang;
        if let Some(label) = doc.element_by_id("current-lang") {
            doc.set_text(label, lang.label());
        }
        self.store.save(lang)?;
        Ok(redirect_for(path, lang))
    }
}
