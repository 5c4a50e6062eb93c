//! Page flow — drives `PageCore` through realistic event sequences against an
//! in-memory stand-in for the document, storage and timer queue.
#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use portfolio_page::config::PageConfig;
use portfolio_page::consts;
use portfolio_page::engine::{Effect, Event, PageCore, StartupSnapshot};
use portfolio_page::state::form::{Field, FormValues};
use portfolio_page::state::nav::SectionGeometry;
use portfolio_page::state::reveal::TargetId;

/// Minimal document model that applies effects the way the browser layer does.
#[derive(Default)]
struct FakePage {
    storage: HashMap<String, String>,
    theme_attr: Option<String>,
    greeting: String,
    toggle_active: bool,
    menu_active: bool,
    field_errors: HashMap<Field, String>,
    field_borders: HashMap<Field, String>,
    field_values: HashMap<Field, String>,
    status_text: String,
    status_class: String,
    reveal_counts: HashMap<usize, usize>,
    observed: Vec<usize>,
    header_shadow: String,
    scrolled_to: Option<f64>,
    default_prevented: bool,
    pending_timers: Vec<u32>,
}

impl FakePage {
    fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::PreventDefault => self.default_prevented = true,
                Effect::SetThemeAttribute(theme) => self.theme_attr = Some(theme.as_str().to_owned()),
                Effect::PersistTheme(theme) => {
                    self.storage.insert(consts::THEME_STORAGE_KEY.to_owned(), theme.as_str().to_owned());
                }
                Effect::SetGreeting(greeting) => self.greeting = greeting.text().to_owned(),
                Effect::ToggleMenuClasses => {
                    self.toggle_active = !self.toggle_active;
                    self.menu_active = !self.menu_active;
                }
                Effect::CloseMenu => {
                    self.toggle_active = false;
                    self.menu_active = false;
                }
                Effect::SmoothScrollTo { top } => self.scrolled_to = Some(top),
                Effect::ShowFieldError { field, error } => {
                    self.field_errors.insert(field, error.to_string());
                    self.field_borders.insert(field, consts::ERROR_BORDER_COLOR.to_owned());
                }
                Effect::ClearFieldError(field) => {
                    self.field_errors.remove(&field);
                    self.field_borders.remove(&field);
                }
                Effect::SetFormStatus(status) => {
                    self.status_text = status.text().to_owned();
                    self.status_class = status.class_name().to_owned();
                }
                Effect::ResetForm => self.field_values.clear(),
                Effect::ScheduleStatusClear { delay_ms } => self.pending_timers.push(delay_ms),
                Effect::Reveal(TargetId(i)) => *self.reveal_counts.entry(i).or_default() += 1,
                Effect::Unobserve(TargetId(i)) => self.observed.retain(|&o| o != i),
                Effect::SetHeaderShadow(shadow) => self.header_shadow = shadow.css().to_owned(),
            }
        }
    }

    fn form_values(&self) -> FormValues {
        let get = |f: Field| self.field_values.get(&f).cloned().unwrap_or_default();
        FormValues { name: get(Field::Name), email: get(Field::Email), message: get(Field::Message) }
    }
}

struct Harness {
    core: PageCore,
    page: FakePage,
}

impl Harness {
    fn start(stored: Option<&str>, prefers_dark: bool, hour: u32) -> Self {
        let mut page = FakePage::default();
        if let Some(theme) = stored {
            page.storage.insert(consts::THEME_STORAGE_KEY.to_owned(), theme.to_owned());
        }
        page.observed = (0..4).collect();
        let mut core = PageCore::new(&PageConfig::default());
        let snapshot = StartupSnapshot {
            stored_theme: page.storage.get(consts::THEME_STORAGE_KEY).cloned(),
            system_prefers_dark: prefers_dark,
            hour,
            menu_open: false,
            reveal_targets: 4,
        };
        page.apply(core.handle(Event::Init(snapshot)));
        Self { core, page }
    }

    fn send(&mut self, event: Event) {
        self.page.default_prevented = false;
        let effects = self.core.handle(event);
        self.page.apply(effects);
    }

    /// Fire every pending status timer, oldest first.
    fn elapse_timers(&mut self) {
        let timers = std::mem::take(&mut self.page.pending_timers);
        for _ in timers {
            self.send(Event::StatusTimerElapsed);
        }
    }

    fn type_into(&mut self, field: Field, value: &str) {
        self.page.field_values.insert(field, value.to_owned());
    }
}

// =============================================================
// Theme
// =============================================================

#[test]
fn storage_matches_attribute_after_every_toggle() {
    let mut h = Harness::start(None, true, 10);
    assert_eq!(h.page.theme_attr.as_deref(), Some("dark"));
    assert!(h.page.storage.is_empty());

    h.send(Event::ThemeToggleClicked);
    assert_eq!(h.page.theme_attr.as_deref(), Some("light"));
    assert_eq!(h.page.storage.get("theme").map(String::as_str), Some("light"));

    h.send(Event::ThemeToggleClicked);
    assert_eq!(h.page.theme_attr.as_deref(), Some("dark"));
    assert_eq!(h.page.storage.get("theme").map(String::as_str), Some("dark"));
}

#[test]
fn stored_theme_survives_reload() {
    let mut first = Harness::start(None, false, 10);
    first.send(Event::ThemeToggleClicked);
    let stored = first.page.storage.get("theme").cloned();

    let second = Harness::start(stored.as_deref(), false, 10);
    assert_eq!(second.page.theme_attr.as_deref(), Some("dark"));
}

// =============================================================
// Greeting
// =============================================================

#[test]
fn greeting_follows_the_clock() {
    let mut h = Harness::start(None, false, 8);
    assert!(h.page.greeting.starts_with("Good morning!"));
    h.send(Event::GreetingTick { hour: 13 });
    assert!(h.page.greeting.starts_with("Good afternoon!"));
    h.send(Event::GreetingTick { hour: 23 });
    assert!(h.page.greeting.starts_with("Hello there!"));
}

// =============================================================
// Navigation and menu
// =============================================================

#[test]
fn toggling_menu_twice_restores_classes() {
    let mut h = Harness::start(None, false, 10);
    let before = (h.page.toggle_active, h.page.menu_active);
    h.send(Event::MenuToggleClicked);
    assert!(h.page.toggle_active && h.page.menu_active);
    h.send(Event::MenuToggleClicked);
    assert_eq!((h.page.toggle_active, h.page.menu_active), before);
}

#[test]
fn toggling_twice_restores_classes_that_start_out_of_sync() {
    let mut h = Harness::start(None, false, 10);
    h.page.toggle_active = true;
    h.send(Event::MenuToggleClicked);
    assert_eq!((h.page.toggle_active, h.page.menu_active), (false, true));
    h.send(Event::MenuToggleClicked);
    assert_eq!((h.page.toggle_active, h.page.menu_active), (true, false));
}

#[test]
fn nav_click_from_open_menu_closes_it_and_scrolls() {
    let mut h = Harness::start(None, false, 10);
    h.send(Event::MenuToggleClicked);
    h.send(Event::NavLinkClicked {
        href: "#contact".to_owned(),
        section: Some(SectionGeometry { offset_top: 2400.0, header_height: 70.0 }),
    });
    assert!(h.page.default_prevented);
    assert!(!h.page.menu_active && !h.page.toggle_active);
    assert_eq!(h.page.scrolled_to, Some(2330.0));
}

#[test]
fn external_nav_link_uses_default_navigation() {
    let mut h = Harness::start(None, false, 10);
    h.send(Event::NavLinkClicked { href: "https://github.com/someone".to_owned(), section: None });
    assert!(!h.page.default_prevented);
    assert_eq!(h.page.scrolled_to, None);
}

// =============================================================
// Contact form
// =============================================================

#[test]
fn valid_submission_resets_and_clears_status_later() {
    let mut h = Harness::start(None, false, 10);
    h.type_into(Field::Name, "A");
    h.send(Event::FieldBlurred { field: Field::Name, value: "A".to_owned() });
    assert_eq!(h.page.field_errors.get(&Field::Name).map(String::as_str), Some("Name must be at least 2 characters"));

    h.type_into(Field::Name, "Ada Lovelace");
    h.type_into(Field::Email, "ada@example.com");
    h.type_into(Field::Message, "Interested in your compiler work.");
    let values = h.page.form_values();
    h.send(Event::FormSubmitted(values));

    assert!(h.page.default_prevented);
    assert!(h.page.field_errors.is_empty());
    assert!(h.page.field_borders.is_empty());
    assert!(h.page.field_values.is_empty());
    assert_eq!(h.page.status_text, "Message sent successfully! ✓");
    assert_eq!(h.page.status_class, "form-status success");
    assert_eq!(h.page.pending_timers, vec![consts::STATUS_CLEAR_MS]);

    h.elapse_timers();
    assert_eq!(h.page.status_text, "");
    assert_eq!(h.page.status_class, "form-status");
}

#[test]
fn rejected_submission_keeps_field_errors_after_status_clears() {
    let mut h = Harness::start(None, false, 10);
    h.type_into(Field::Email, "not-an-email");
    let values = h.page.form_values();
    h.send(Event::FormSubmitted(values));

    assert_eq!(h.page.status_text, "Please fix the errors above");
    assert_eq!(h.page.field_errors.get(&Field::Name).map(String::as_str), Some("Name is required"));
    assert_eq!(
        h.page.field_errors.get(&Field::Email).map(String::as_str),
        Some("Please enter a valid email address")
    );
    assert_eq!(h.page.field_errors.get(&Field::Message).map(String::as_str), Some("Message is required"));
    assert_eq!(h.page.field_values.get(&Field::Email).map(String::as_str), Some("not-an-email"));

    h.elapse_timers();
    assert_eq!(h.page.status_text, "");
    assert_eq!(h.page.field_errors.len(), 3);
}

#[test]
fn correcting_a_field_on_blur_clears_its_error() {
    let mut h = Harness::start(None, false, 10);
    h.send(Event::FormSubmitted(FormValues::default()));
    assert!(h.page.field_errors.contains_key(&Field::Message));
    h.send(Event::FieldBlurred { field: Field::Message, value: "Ten chars!".to_owned() });
    assert!(!h.page.field_errors.contains_key(&Field::Message));
    assert!(!h.page.field_borders.contains_key(&Field::Message));
}

// =============================================================
// Reveal and header
// =============================================================

#[test]
fn each_target_reveals_at_most_once() {
    let mut h = Harness::start(None, false, 10);
    for _ in 0..3 {
        for i in 0..4 {
            h.send(Event::TargetIntersected { target: TargetId(i), is_intersecting: false });
            h.send(Event::TargetIntersected { target: TargetId(i), is_intersecting: true });
        }
    }
    for i in 0..4 {
        assert_eq!(h.page.reveal_counts.get(&i), Some(&1), "target {i}");
    }
    assert!(h.page.observed.is_empty());
}

#[test]
fn header_shadow_tracks_scroll_position() {
    let mut h = Harness::start(None, false, 10);
    h.send(Event::Scrolled { scroll_y: 120.0 });
    assert_eq!(h.page.header_shadow, consts::HEADER_SHADOW);
    h.send(Event::Scrolled { scroll_y: 120.0 });
    assert_eq!(h.page.header_shadow, consts::HEADER_SHADOW);
    h.send(Event::Scrolled { scroll_y: 0.0 });
    assert_eq!(h.page.header_shadow, "none");
}
