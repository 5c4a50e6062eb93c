//! Light/dark theme preference.
//!
//! The stored value and the `data-theme` attribute share one lowercase
//! spelling. Anything else found in storage is treated as "no preference"
//! and the system color scheme decides.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Attribute and storage spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Only the exact lowercase spellings are accepted.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
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

    /// Startup resolution: a valid stored preference wins, then the system scheme.
    #[must_use]
    pub fn resolve(stored: Option<&str>, system_prefers_dark: bool) -> Self {
        if let Some(theme) = stored.and_then(Self::parse) {
            return theme;
        }
        if system_prefers_dark { Self::Dark } else { Self::Light }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
