//! Light/dark theme preference.
//!
//! Reads the saved preference through a [`PreferenceStore`] and applies it
//! as a `data-theme` attribute on the document root. Toggling writes the new
//! value back and relabels the toggle control.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort. Storage failures are logged and the theme
//! still changes in memory, so a locked-down browser gets a working toggle
//! that simply does not survive reload.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{ARIA_LABEL, THEME_ATTRIBUTE, TITLE};
use crate::dom::{Element, PreferenceStore, report};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored value; anything other than `light`/`dark` is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Accessible label for the toggle while this theme is active.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Dark => "Switch to light mode",
            Self::Light => "Switch to dark mode",
        }
    }
}

/// Owns the theme attribute on the root element and its persisted copy.
pub struct ThemeManager<S, E> {
    store: S,
    root: E,
    toggle: Option<E>,
    storage_key: String,
}

impl<S: PreferenceStore, E: Element> ThemeManager<S, E> {
    /// Resolve the saved theme and apply it to `root`.
    pub fn load(store: S, root: E, toggle: Option<E>, storage_key: &str) -> Self {
        let manager = Self { store, root, toggle, storage_key: storage_key.to_owned() };
        let theme = manager.saved();
        manager.apply(theme);
        manager
    }

    /// The persisted preference, or `Light` when absent, invalid, or unreadable.
    pub fn saved(&self) -> Theme {
        match self.store.load(&self.storage_key) {
            Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
                log::warn!("ignoring invalid theme preference {raw:?}");
                Theme::Light
            }),
            Ok(None) => Theme::Light,
            Err(e) => {
                log::warn!("reading theme preference: {e}");
                Theme::Light
            }
        }
    }

    /// The theme currently applied to the root element.
    pub fn current(&self) -> Theme {
        self.root
            .attribute(THEME_ATTRIBUTE)
            .and_then(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    /// Flip the theme, persist it, and relabel the toggle.
    pub fn toggle(&self) -> Theme {
        let next = self.current().opposite();
        self.apply(next);
        if let Err(e) = self.store.save(&self.storage_key, next.as_str()) {
            log::warn!("persisting theme preference: {e}");
        }
        log::debug!("theme switched to {}", next.as_str());
        next
    }

    fn apply(&self, theme: Theme) {
        report("applying theme", self.root.set_attribute(THEME_ATTRIBUTE, theme.as_str()));
        if let Some(toggle) = &self.toggle {
            let label = theme.toggle_label();
            report("labelling theme toggle", toggle.set_attribute(ARIA_LABEL, label));
            report("labelling theme toggle", toggle.set_attribute(TITLE, label));
        }
    }
}
