//! Browser binding for [`PageCore`](crate::engine::PageCore).
//!
//! ARCHITECTURE
//! ============
//! `start` runs once the wasm module is instantiated. It reads the startup
//! snapshot, hands it to the core, then binds one listener per behaviour.
//! Every listener translates its DOM event into an [`Event`] and routes it
//! through [`Page::dispatch`], which applies the returned effects. A binder
//! whose elements are missing logs at `debug` and does nothing.

mod bind;
mod env;
mod observer;
mod page;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::engine::{Event, StartupSnapshot};
use crate::error::PageError;

use page::Page;

/// Wasm entry point. Defers to `DOMContentLoaded` while the document is still parsing.
///
/// # Errors
///
/// Returns the stringified [`PageError`] when there is no window/document or
/// a listener cannot be registered.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let window = web_sys::window().ok_or(PageError::NoWindow)?;
    let document = window.document().ok_or(PageError::NoDocument)?;

    if document.ready_state() == "loading" {
        let deferred = document.clone();
        let on_ready = Closure::once_into_js(move || {
            if let Err(err) = run(window, deferred) {
                log::error!("page controller failed to start: {err}");
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        return Ok(());
    }

    run(window, document).map_err(JsValue::from)
}

fn run(window: Window, document: Document) -> Result<(), PageError> {
    let (config, config_err) = match env::load_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (PageConfig::default(), Some(err)),
    };
    if console_log::init_with_level(config.log_level.into()).is_err() {
        log::debug!("console logger already installed");
    }
    if let Some(err) = config_err {
        log::warn!("ignoring #page-config: {err}");
    }

    let page = Rc::new(Page::new(window, document, config));
    let reveal_targets = observer::collect_targets(&page)?;
    let snapshot = StartupSnapshot {
        stored_theme: env::read_stored_theme(&page.window, &page.config.storage_key),
        system_prefers_dark: env::system_prefers_dark(&page.window),
        hour: env::current_hour(),
        menu_open: page.menu_open_in_dom(),
        reveal_targets,
    };
    page.dispatch(Event::Init(snapshot), None);

    bind::bind_nav_links(&page)?;
    bind::bind_menu_toggle(&page)?;
    bind::bind_contact_form(&page)?;
    observer::observe_targets(&page)?;
    bind::bind_header_scroll(&page)?;
    bind::bind_theme_toggle(&page)?;
    bind::start_greeting_timer(&page);

    log::info!("page controller started ({reveal_targets} reveal targets)");
    Ok(())
}

/// Log a failed web API call that has no bearing on control flow.
fn warn_on_err<T>(result: Result<T, JsValue>, what: &str) {
    if let Err(err) = result {
        log::warn!("{what} failed: {err:?}");
    }
}
