//! Reads from the browser environment: storage, media queries, clock, config.

use web_sys::{Document, Storage, Window};

use crate::config::{ConfigError, PageConfig};
use crate::consts;
use crate::state::theme::ThemePreference;

fn local_storage(window: &Window) -> Option<Storage> {
    match window.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            log::warn!("localStorage unavailable: {err:?}");
            None
        }
    }
}

/// Raw stored theme value, if any.
pub(super) fn read_stored_theme(window: &Window, key: &str) -> Option<String> {
    let storage = local_storage(window)?;
    match storage.get_item(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("reading {key} from localStorage failed: {err:?}");
            None
        }
    }
}

pub(super) fn persist_theme(window: &Window, key: &str, theme: ThemePreference) {
    let Some(storage) = local_storage(window) else {
        return;
    };
    if let Err(err) = storage.set_item(key, theme.as_str()) {
        log::warn!("writing {key} to localStorage failed: {err:?}");
    }
}

pub(super) fn system_prefers_dark(window: &Window) -> bool {
    match window.match_media(consts::DARK_SCHEME_QUERY) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(err) => {
            log::warn!("matchMedia failed: {err:?}");
            false
        }
    }
}

/// Local wall-clock hour, 0-23.
pub(super) fn current_hour() -> u32 {
    js_sys::Date::new_0().get_hours()
}

/// Parse the optional `<script type="application/json" id="page-config">` block.
pub(super) fn load_config(document: &Document) -> Result<PageConfig, ConfigError> {
    let Some(el) = document.get_element_by_id(consts::PAGE_CONFIG_ID) else {
        return Ok(PageConfig::default());
    };
    let raw = el.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(PageConfig::default());
    }
    PageConfig::from_json(&raw)
}
