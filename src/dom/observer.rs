//! Scroll reveal wiring via `IntersectionObserver`.
//!
//! Each matched element is tagged with its [`TargetId`] in `data-reveal-id`
//! so observer entries can be mapped back to the core's reveal set.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Page;
use crate::consts;
use crate::engine::Event;
use crate::error::PageError;
use crate::state::reveal::TargetId;

/// Tag and store every reveal target. Returns how many were found.
pub(super) fn collect_targets(page: &Page) -> Result<usize, PageError> {
    if page.config.reveal_selectors.is_empty() {
        return Ok(0);
    }
    let nodes = page.document.query_selector_all(&page.config.reveal_selector())?;
    let mut targets = Vec::new();
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|node| node.dyn_ref::<Element>().cloned()) else {
            continue;
        };
        el.set_attribute(consts::REVEAL_ID_ATTR, &targets.len().to_string())?;
        targets.push(el);
    }
    let count = targets.len();
    *page.reveal_targets.borrow_mut() = targets;
    Ok(count)
}

fn target_id(el: &Element) -> Option<TargetId> {
    let raw = el.get_attribute(consts::REVEAL_ID_ATTR)?;
    match raw.parse::<usize>() {
        Ok(index) => Some(TargetId(index)),
        Err(_) => None,
    }
}

pub(super) fn observe_targets(page: &Rc<Page>) -> Result<(), PageError> {
    if page.reveal_targets.borrow().is_empty() {
        return Ok(());
    }

    let page_for_cb = Rc::clone(page);
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let Some(target) = target_id(&entry.target()) else {
                continue;
            };
            let is_intersecting = entry.is_intersecting();
            page_for_cb.dispatch(Event::TargetIntersected { target, is_intersecting }, None);
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(page.config.reveal_threshold));
    init.set_root_margin(&page.config.reveal_root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for el in page.reveal_targets.borrow().iter() {
        observer.observe(el);
    }
    *page.observer.borrow_mut() = Some(observer);
    Ok(())
}
