//! Page configuration.
//!
//! Every field has a default matching the stock markup, so a page without a
//! `#page-config` block behaves exactly like one with an empty object. Keys
//! are camelCase to match the JSON written by hand into the HTML.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;

/// Errors produced while loading [`PageConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON block could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// Intersection thresholds must lie in `[0, 1]`.
    #[error("reveal threshold {0} outside [0, 1]")]
    InvalidThreshold(f64),

    /// A timer delay was configured as zero.
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),

    /// The storage key was blank.
    #[error("storage key must not be empty")]
    EmptyStorageKey,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub storage_key: String,
    pub greeting_refresh_ms: u32,
    pub status_clear_ms: u32,
    pub header_shadow_offset: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_selectors: Vec<String>,
    pub reveal_class: String,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            greeting_refresh_ms: consts::GREETING_REFRESH_MS,
            status_clear_ms: consts::STATUS_CLEAR_MS,
            header_shadow_offset: consts::HEADER_SHADOW_OFFSET_PX,
            reveal_threshold: consts::REVEAL_THRESHOLD,
            reveal_root_margin: consts::REVEAL_ROOT_MARGIN.to_owned(),
            reveal_selectors: consts::REVEAL_SELECTORS.iter().map(|s| (*s).to_owned()).collect(),
            reveal_class: consts::REVEAL_CLASS.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config block.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the JSON is malformed or a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(ConfigError::InvalidThreshold(self.reveal_threshold));
        }
        if self.greeting_refresh_ms == 0 {
            return Err(ConfigError::ZeroDelay("greetingRefreshMs"));
        }
        if self.status_clear_ms == 0 {
            return Err(ConfigError::ZeroDelay("statusClearMs"));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(())
    }

    /// Selector list joined for a single `querySelectorAll` call.
    #[must_use]
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}

/// Console log verbosity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}
