//! Errors surfaced by the browser layer during startup.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No global `window` (not running in a browser main thread).
    #[error("window is not available")]
    NoWindow,

    /// The window has no document.
    #[error("document is not available")]
    NoDocument,

    /// A web API call failed; carries the stringified JS error.
    #[error("web api call failed: {0}")]
    Js(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<PageError> for wasm_bindgen::JsValue {
    fn from(err: PageError) -> Self {
        Self::from_str(&err.to_string())
    }
}
