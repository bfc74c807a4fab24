//! Theme preference store
//!
//! Light/dark mode with a stored override. The effective mode starts from
//! the system default and flips on toggle; the choice is persisted so it
//! survives restarts.

use crate::config::storage::THEME_KEY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use super::store::KvStore;

/// The two supported color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored value, `None` for anything unrecognized
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The active theme, backed by a `KvStore`
pub struct ThemeStore {
    store: Arc<dyn KvStore>,
    mode: ThemeMode,
}

impl ThemeStore {
    /// Load the theme, preferring a stored override over `system_default`
    ///
    /// Read failures and unrecognized stored values fall back to the
    /// system default.
    pub fn load(store: Arc<dyn KvStore>, system_default: ThemeMode) -> Self {
        let mode = match store.get(THEME_KEY) {
            Ok(Some(raw)) => ThemeMode::parse(&raw).unwrap_or(system_default),
            Ok(None) => system_default,
            Err(e) => {
                eprintln!("Warning: could not load theme preference: {e}");
                system_default
            }
        };
        Self { store, mode }
    }

    /// The current mode
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist the new choice
    ///
    /// The flip takes effect even when persisting fails.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        if let Err(e) = self.store.set(THEME_KEY, self.mode.as_str()) {
            eprintln!("Warning: could not save theme preference: {e}");
        }
        self.mode
    }
}
