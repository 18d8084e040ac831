//! Light/dark theme with a persisted preference.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{FolioError, FolioResult};

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "theme";

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Theme after a toggle from `current` (the `data-theme` attribute).
    ///
    /// Only an explicit light theme goes dark; anything else goes light.
    #[must_use]
    pub fn toggled_from(current: Option<&str>) -> Self {
        match current.map(str::parse::<Self>) {
            Some(Ok(Self::Light)) => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Attribute/storage value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(FolioError::InvalidConfig(format!("unknown theme {other:?}"))),
        }
    }
}

/// A string key-value store for user preferences.
pub trait PreferenceStore {
    /// Reads a value.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] if the store is unavailable.
    fn load(&self, key: &str) -> FolioResult<Option<String>>;

    /// Writes a value.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] if the store rejects the write.
    fn save(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Restores and toggles the theme through a [`PreferenceStore`].
#[derive(Debug, Clone)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Wraps a store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The saved raw value, applied verbatim on startup.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn restore(&self) -> FolioResult<Option<String>> {
        self.store.load(THEME_KEY)
    }

    /// Computes the next theme from the current attribute and persists it.
    ///
    /// # Errors
    ///
    /// Propagates store failures.
    pub fn toggle(&mut self, current: Option<&str>) -> FolioResult<Theme> {
        let next = Theme::toggled_from(current);
        self.store.save(THEME_KEY, next.as_str())?;
        tracing::debug!(theme = next.as_str(), "theme toggled");
        Ok(next)
    }

    /// The wrapped store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}
