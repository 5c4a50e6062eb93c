//! Event listener and timer registration.
//!
//! Listener closures are leaked with `forget()`: they live as long as the
//! page does and nothing ever unbinds them.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, EventTarget};

use super::{Page, env};
use crate::consts;
use crate::engine::Event;
use crate::error::PageError;
use crate::state::form::{Field, FormValues};

fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(web_sys::Event) + 'static) -> Result<(), PageError> {
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

pub(super) fn bind_nav_links(page: &Rc<Page>) -> Result<(), PageError> {
    let links = page.document.query_selector_all(consts::NAV_LINK_SELECTOR)?;
    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|node| node.dyn_ref::<Element>().cloned()) else {
            continue;
        };
        let page = Rc::clone(page);
        let link_for_click = link.clone();
        listen(&link, "click", move |ev| {
            let href = link_for_click.get_attribute("href").unwrap_or_default();
            let section = page.section_geometry(&href);
            page.dispatch(Event::NavLinkClicked { href, section }, Some(&ev));
        })?;
    }
    log::debug!("bound {} nav links", links.length());
    Ok(())
}

pub(super) fn bind_menu_toggle(page: &Rc<Page>) -> Result<(), PageError> {
    let (Some(toggle), Some(_menu)) = (
        page.document.get_element_by_id(consts::NAV_TOGGLE_ID),
        page.document.get_element_by_id(consts::NAV_MENU_ID),
    ) else {
        log::debug!("no #{} / #{}; mobile menu disabled", consts::NAV_TOGGLE_ID, consts::NAV_MENU_ID);
        return Ok(());
    };
    let page = Rc::clone(page);
    listen(&toggle, "click", move |ev| page.dispatch(Event::MenuToggleClicked, Some(&ev)))
}

pub(super) fn bind_theme_toggle(page: &Rc<Page>) -> Result<(), PageError> {
    let Some(button) = page.document.get_element_by_id(consts::THEME_TOGGLE_ID) else {
        log::debug!("no #{}; theme toggle disabled", consts::THEME_TOGGLE_ID);
        return Ok(());
    };
    let page = Rc::clone(page);
    listen(&button, "click", move |ev| page.dispatch(Event::ThemeToggleClicked, Some(&ev)))
}

pub(super) fn bind_contact_form(page: &Rc<Page>) -> Result<(), PageError> {
    let (Some(form), Some(_status)) = (
        page.document.get_element_by_id(consts::CONTACT_FORM_ID),
        page.document.get_element_by_id(consts::FORM_STATUS_ID),
    ) else {
        log::debug!("no #{} / #{}; contact form disabled", consts::CONTACT_FORM_ID, consts::FORM_STATUS_ID);
        return Ok(());
    };

    {
        let page = Rc::clone(page);
        listen(&form, "submit", move |ev| {
            let values = FormValues {
                name: page.field_value(Field::Name),
                email: page.field_value(Field::Email),
                message: page.field_value(Field::Message),
            };
            page.dispatch(Event::FormSubmitted(values), Some(&ev));
        })?;
    }

    for field in Field::ALL {
        let Some(input) = page.document.get_element_by_id(field.id()) else {
            continue;
        };
        let page = Rc::clone(page);
        listen(&input, "blur", move |ev| {
            let value = page.field_value(field);
            page.dispatch(Event::FieldBlurred { field, value }, Some(&ev));
        })?;
    }
    Ok(())
}

pub(super) fn bind_header_scroll(page: &Rc<Page>) -> Result<(), PageError> {
    if page.document.get_element_by_id(consts::HEADER_ID).is_none() {
        log::debug!("no #{}; header shadow disabled", consts::HEADER_ID);
        return Ok(());
    }
    let page_for_scroll = Rc::clone(page);
    listen(&page.window, "scroll", move |ev| {
        let scroll_y = page_for_scroll.window.scroll_y().unwrap_or(0.0);
        page_for_scroll.dispatch(Event::Scrolled { scroll_y }, Some(&ev));
    })
}

pub(super) fn start_greeting_timer(page: &Rc<Page>) {
    let page = Rc::clone(page);
    let period = page.config.greeting_refresh_ms;
    Interval::new(period, move || page.dispatch(Event::GreetingTick { hour: env::current_hour() }, None)).forget();
}
