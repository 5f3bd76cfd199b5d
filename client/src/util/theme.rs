//! Theme initialization and toggle.
//!
//! Reads the visitor's preference from `localStorage["theme"]` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op so server rendering always starts from the light theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::storage;

pub const STORAGE_KEY: &str = "theme";

/// Display theme persisted as `"light"` or `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than the two known values is `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Glyph shown on the toggle button: the theme you would switch to.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Key-value backing for the theme flag.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

/// `localStorage`-backed store. A no-op outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl ThemeStore for LocalStore {
    fn load(&self) -> Option<String> {
        storage::load_string(STORAGE_KEY)
    }

    fn save(&self, value: &str) {
        storage::save_string(STORAGE_KEY, value);
    }
}

/// Read the theme from `store`, falling back to light.
pub fn read_from(store: &impl ThemeStore) -> Theme {
    store
        .load()
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Apply and persist `theme` through `store`.
pub fn set_in(store: &impl ThemeStore, theme: Theme) {
    apply(theme);
    store.save(theme.as_str());
}

/// Read the theme preference from localStorage.
pub fn read_preference() -> Theme {
    read_from(&LocalStore)
}

/// Apply `theme` to the document and persist it.
pub fn set_theme(theme: Theme) {
    set_in(&LocalStore, theme);
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme and persist the new preference to localStorage.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    set_theme(next);
    next
}
