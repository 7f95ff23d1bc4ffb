//! Light/dark theme preference.
//!
//! The preference is the only value this crate persists. Anything other
//! than the exact stored string `"dark"` loads as light, so a corrupted or
//! foreign value never leaves the page in an unexpected mode.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::StorageError;

/// Key/value persistence for the theme preference.
///
/// Implemented over `localStorage` in the browser.
pub trait PreferenceStore {
    /// Read the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backing store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Display mode applied to the document root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Only `"dark"` selects [`Theme::Dark`].
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Value persisted for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Theme currently applied to the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
}

impl ThemeState {
    /// Read the stored preference once at startup.
    pub fn load(store: &impl PreferenceStore, key: &str) -> Self {
        let stored = store.get(key);
        let theme = Theme::from_stored(stored.as_deref());
        log::debug!("theme preference {stored:?} -> {}", theme.as_str());
        Self { theme }
    }

    /// Flip the applied theme and persist it.
    ///
    /// The in-memory theme flips even when persistence fails; the failure is
    /// logged and the preference simply will not survive a reload.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore, key: &str) -> Theme {
        self.theme = self.theme.flipped();
        if let Err(err) = store.set(key, self.theme.as_str()) {
            log::warn!("theme not persisted: {err}");
        }
        self.theme
    }

    /// Value for the toggle control's `aria-pressed`.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.theme.is_dark()
    }
}
