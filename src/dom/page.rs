//! Shared page handle: owns the core and applies its effects to the DOM.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, IntersectionObserver,
    ScrollBehavior, ScrollToOptions, Window,
};

use super::{env, warn_on_err};
use crate::config::PageConfig;
use crate::consts;
use crate::engine::{Effect, Event, PageCore};
use crate::state::form::{Field, FormStatus};
use crate::state::nav::{SectionGeometry, anchor_target};

pub(crate) struct Page {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) config: PageConfig,
    core: RefCell<PageCore>,
    pub(super) reveal_targets: RefCell<Vec<Element>>,
    pub(super) observer: RefCell<Option<IntersectionObserver>>,
}

impl Page {
    pub(crate) fn new(window: Window, document: Document, config: PageConfig) -> Self {
        let core = PageCore::new(&config);
        Self {
            window,
            document,
            config,
            core: RefCell::new(core),
            reveal_targets: RefCell::new(Vec::new()),
            observer: RefCell::new(None),
        }
    }

    /// Run `event` through the core, then apply its effects.
    ///
    /// The core borrow ends before any effect runs, so effects may schedule
    /// further dispatches.
    pub(crate) fn dispatch(self: &Rc<Self>, event: Event, dom_event: Option<&web_sys::Event>) {
        let effects = self.core.borrow_mut().handle(event);
        for effect in effects {
            self.apply(effect, dom_event);
        }
    }

    fn apply(self: &Rc<Self>, effect: Effect, dom_event: Option<&web_sys::Event>) {
        match effect {
            Effect::PreventDefault => {
                if let Some(ev) = dom_event {
                    ev.prevent_default();
                }
            }
            Effect::SetThemeAttribute(theme) => {
                if let Some(root) = self.document.document_element() {
                    warn_on_err(root.set_attribute(consts::THEME_ATTR, theme.as_str()), "set data-theme");
                }
            }
            Effect::PersistTheme(theme) => env::persist_theme(&self.window, &self.config.storage_key, theme),
            Effect::SetGreeting(greeting) => {
                if let Some(el) = self.document.get_element_by_id(consts::GREETING_ID) {
                    el.set_text_content(Some(greeting.text()));
                }
            }
            Effect::ToggleMenuClasses => {
                for id in [consts::NAV_TOGGLE_ID, consts::NAV_MENU_ID] {
                    if let Some(el) = self.document.get_element_by_id(id) {
                        warn_on_err(el.class_list().toggle(consts::MENU_ACTIVE_CLASS), "toggle menu");
                    }
                }
            }
            Effect::CloseMenu => {
                for id in [consts::NAV_TOGGLE_ID, consts::NAV_MENU_ID] {
                    if let Some(el) = self.document.get_element_by_id(id) {
                        warn_on_err(el.class_list().remove_1(consts::MENU_ACTIVE_CLASS), "close menu");
                    }
                }
            }
            Effect::SmoothScrollTo { top } => {
                let options = ScrollToOptions::new();
                options.set_top(top);
                options.set_behavior(ScrollBehavior::Smooth);
                self.window.scroll_to_with_scroll_to_options(&options);
            }
            Effect::ShowFieldError { field, error } => self.set_field_error(field, Some(&error.to_string())),
            Effect::ClearFieldError(field) => self.set_field_error(field, None),
            Effect::SetFormStatus(status) => self.set_form_status(status),
            Effect::ResetForm => {
                if let Some(form) = self.element_as::<HtmlFormElement>(consts::CONTACT_FORM_ID) {
                    form.reset();
                }
            }
            Effect::ScheduleStatusClear { delay_ms } => {
                let page = Rc::clone(self);
                Timeout::new(delay_ms, move || page.dispatch(Event::StatusTimerElapsed, None)).forget();
            }
            Effect::Reveal(target) => {
                if let Some(el) = self.reveal_targets.borrow().get(target.0) {
                    warn_on_err(el.class_list().add_1(&self.config.reveal_class), "add reveal class");
                }
            }
            Effect::Unobserve(target) => {
                let targets = self.reveal_targets.borrow();
                if let (Some(observer), Some(el)) = (self.observer.borrow().as_ref(), targets.get(target.0)) {
                    observer.unobserve(el);
                }
            }
            Effect::SetHeaderShadow(shadow) => {
                if let Some(header) = self.element_as::<HtmlElement>(consts::HEADER_ID) {
                    warn_on_err(header.style().set_property("box-shadow", shadow.css()), "set header shadow");
                }
            }
        }
    }

    /// Show `message` under `field`, or clear it. Needs both the input and its error node.
    fn set_field_error(&self, field: Field, message: Option<&str>) {
        let Some(error_el) = self.document.get_element_by_id(&field.error_id()) else {
            return;
        };
        let Some(input) = self.element_as::<HtmlElement>(field.id()) else {
            return;
        };
        error_el.set_text_content(Some(message.unwrap_or("")));
        let border = if message.is_some() { consts::ERROR_BORDER_COLOR } else { "" };
        warn_on_err(input.style().set_property("border-color", border), "set field border");
    }

    fn set_form_status(&self, status: FormStatus) {
        if let Some(el) = self.document.get_element_by_id(consts::FORM_STATUS_ID) {
            el.set_text_content(Some(status.text()));
            el.set_class_name(status.class_name());
        }
    }

    pub(crate) fn element_as<T: JsCast + Clone>(&self, id: &str) -> Option<T> {
        self.document.get_element_by_id(id)?.dyn_ref::<T>().cloned()
    }

    /// Current value of a text input or textarea; empty when neither.
    pub(crate) fn field_value(&self, field: Field) -> String {
        let Some(el) = self.document.get_element_by_id(field.id()) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    /// Measure the section an anchor href points at, if it exists.
    pub(crate) fn section_geometry(&self, href: &str) -> Option<SectionGeometry> {
        let section = self.element_as::<HtmlElement>(anchor_target(href)?)?;
        let header_height = self
            .element_as::<HtmlElement>(consts::HEADER_ID)
            .map_or(0.0, |header| f64::from(header.offset_height()));
        Some(SectionGeometry { offset_top: f64::from(section.offset_top()), header_height })
    }

    /// Whether the menu panel starts open. The toggle button's class is not consulted.
    pub(crate) fn menu_open_in_dom(&self) -> bool {
        self.document
            .get_element_by_id(consts::NAV_MENU_ID)
            .is_some_and(|menu| menu.class_list().contains(consts::MENU_ACTIVE_CLASS))
    }
}
