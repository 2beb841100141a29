//! Light/dark theme preference.
//!
//! # Responsibility
//! - Read, toggle and persist the display theme under the fixed key.
//! - Honor the system preference only while no explicit choice is stored.
//!
//! # Invariants
//! - Missing or unrecognized stored values read as light.
//! - The rendering core never depends on the active theme.

use crate::storage::KeyValueStore;

/// Persisted preference key.
pub const THEME_PREF_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

/// Returns the active theme, defaulting to light.
pub fn current(store: &dyn KeyValueStore) -> Theme {
    store
        .get(THEME_PREF_KEY)
        .as_deref()
        .and_then(Theme::parse)
        .unwrap_or_default()
}

/// Flips and persists the theme; returns the new value.
pub fn toggle(store: &mut dyn KeyValueStore) -> Theme {
    let next = match current(store) {
        Theme::Light => Theme::Dark,
        Theme::Dark => Theme::Light,
    };
    store.set(THEME_PREF_KEY, next.as_str());
    next
}

/// Applies the host's system color-scheme hint.
///
/// Only takes effect while the user has not stored an explicit preference;
/// returns the theme that became active, or `None` when the hint was
/// ignored.
pub fn apply_system_preference(store: &dyn KeyValueStore, prefers_dark: bool) -> Option<Theme> {
    if store.get(THEME_PREF_KEY).is_some() {
        return None;
    }
    Some(if prefers_dark { Theme::Dark } else { Theme::Light })
}
