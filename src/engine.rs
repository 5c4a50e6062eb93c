//! Event dispatch for the whole page.
//!
//! [`PageCore`] holds every piece of page state and turns one [`Event`] into a
//! list of [`Effect`]s. It never touches the DOM, so each behaviour can be
//! driven and inspected from native tests. The browser layer in `dom` owns
//! the translation in both directions.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::PageConfig;
use crate::state::form::{ContactForm, Field, FieldError, FieldStatus, FormStatus, FormValues, SubmitOutcome};
use crate::state::greeting::Greeting;
use crate::state::header::HeaderShadow;
use crate::state::nav::{MenuState, SectionGeometry, anchor_target};
use crate::state::reveal::{RevealSet, TargetId};
use crate::state::theme::ThemePreference;

/// Values read from the environment once, before any listener is bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartupSnapshot {
    pub stored_theme: Option<String>,
    pub system_prefers_dark: bool,
    pub hour: u32,
    pub menu_open: bool,
    pub reveal_targets: usize,
}

/// Inputs delivered by the browser layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Init(StartupSnapshot),
    ThemeToggleClicked,
    GreetingTick { hour: u32 },
    /// `section` is `None` when the href is not an anchor or names no element.
    NavLinkClicked { href: String, section: Option<SectionGeometry> },
    MenuToggleClicked,
    FieldBlurred { field: Field, value: String },
    FormSubmitted(FormValues),
    StatusTimerElapsed,
    TargetIntersected { target: TargetId, is_intersecting: bool },
    Scrolled { scroll_y: f64 },
}

/// Side effects for the browser layer to apply, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Cancel the default action of the DOM event being handled.
    PreventDefault,
    SetThemeAttribute(ThemePreference),
    PersistTheme(ThemePreference),
    SetGreeting(Greeting),
    /// Flip `active` on the nav toggle and on the menu panel, each on its own.
    ToggleMenuClasses,
    /// Remove `active` from both the nav toggle and the menu panel.
    CloseMenu,
    SmoothScrollTo { top: f64 },
    ShowFieldError { field: Field, error: FieldError },
    ClearFieldError(Field),
    SetFormStatus(FormStatus),
    ResetForm,
    ScheduleStatusClear { delay_ms: u32 },
    Reveal(TargetId),
    Unobserve(TargetId),
    SetHeaderShadow(HeaderShadow),
}

/// All page state. The only writer of the `data-theme` attribute, so its theme
/// always equals the attribute and toggling never needs to read it back.
pub struct PageCore {
    theme: ThemePreference,
    greeting: Greeting,
    menu: MenuState,
    form: ContactForm,
    status: FormStatus,
    reveal: RevealSet,
    status_clear_ms: u32,
    header_shadow_offset: f64,
}

impl PageCore {
    #[must_use]
    pub fn new(config: &PageConfig) -> Self {
        Self {
            theme: ThemePreference::default(),
            greeting: Greeting::for_hour(0),
            menu: MenuState::default(),
            form: ContactForm::new(),
            status: FormStatus::Idle,
            reveal: RevealSet::new(),
            status_clear_ms: config.status_clear_ms,
            header_shadow_offset: config.header_shadow_offset,
        }
    }

    /// Apply one event and return the effects it produces.
    pub fn handle(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Init(snapshot) => self.init(snapshot),
            Event::ThemeToggleClicked => self.toggle_theme(),
            Event::GreetingTick { hour } => self.refresh_greeting(hour),
            Event::NavLinkClicked { href, section } => self.nav_link_clicked(&href, section),
            Event::MenuToggleClicked => {
                self.menu.toggle();
                vec![Effect::ToggleMenuClasses]
            }
            Event::FieldBlurred { field, value } => self.field_blurred(field, &value),
            Event::FormSubmitted(values) => self.form_submitted(&values),
            Event::StatusTimerElapsed => {
                self.status = FormStatus::Idle;
                vec![Effect::SetFormStatus(FormStatus::Idle)]
            }
            Event::TargetIntersected { target, is_intersecting } => {
                if self.reveal.on_intersection(target, is_intersecting) {
                    log::debug!("reveal target {}", target.0);
                    vec![Effect::Reveal(target), Effect::Unobserve(target)]
                } else {
                    Vec::new()
                }
            }
            Event::Scrolled { scroll_y } => {
                vec![Effect::SetHeaderShadow(HeaderShadow::for_offset(scroll_y, self.header_shadow_offset))]
            }
        }
    }

    fn init(&mut self, snapshot: StartupSnapshot) -> Vec<Effect> {
        self.theme = ThemePreference::resolve(snapshot.stored_theme.as_deref(), snapshot.system_prefers_dark);
        self.menu.open = snapshot.menu_open;
        self.reveal.register(snapshot.reveal_targets);
        log::debug!("page init: theme={} hour={} targets={}", self.theme, snapshot.hour, snapshot.reveal_targets);

        let mut effects = vec![Effect::SetThemeAttribute(self.theme)];
        effects.extend(self.refresh_greeting(snapshot.hour));
        effects
    }

    fn toggle_theme(&mut self) -> Vec<Effect> {
        self.theme = self.theme.toggled();
        log::debug!("theme -> {}", self.theme);
        vec![Effect::SetThemeAttribute(self.theme), Effect::PersistTheme(self.theme)]
    }

    fn refresh_greeting(&mut self, hour: u32) -> Vec<Effect> {
        self.greeting = Greeting::for_hour(hour);
        vec![Effect::SetGreeting(self.greeting)]
    }

    fn nav_link_clicked(&mut self, href: &str, section: Option<SectionGeometry>) -> Vec<Effect> {
        if anchor_target(href).is_none() {
            return Vec::new();
        }
        let mut effects = vec![Effect::PreventDefault];
        let Some(section) = section else {
            log::debug!("nav target {href} not found");
            return effects;
        };
        if self.menu.close() {
            effects.push(Effect::CloseMenu);
        }
        effects.push(Effect::SmoothScrollTo { top: section.scroll_top() });
        effects
    }

    fn field_blurred(&mut self, field: Field, value: &str) -> Vec<Effect> {
        match self.form.blur(field, value) {
            FieldStatus::Invalid(error) => vec![Effect::ShowFieldError { field, error }],
            FieldStatus::Valid | FieldStatus::Untouched => vec![Effect::ClearFieldError(field)],
        }
    }

    fn form_submitted(&mut self, values: &FormValues) -> Vec<Effect> {
        let mut effects = vec![Effect::PreventDefault];
        effects.extend(Field::ALL.map(Effect::ClearFieldError));

        match self.form.submit(values) {
            SubmitOutcome::Sent => {
                log::info!("contact form accepted (simulated send)");
                self.status = FormStatus::Sent;
                effects.push(Effect::SetFormStatus(FormStatus::Sent));
                effects.push(Effect::ResetForm);
            }
            SubmitOutcome::Rejected(errors) => {
                log::debug!("contact form rejected: {} field(s)", errors.len());
                effects.extend(errors.into_iter().map(|(field, error)| Effect::ShowFieldError { field, error }));
                self.status = FormStatus::Rejected;
                effects.push(Effect::SetFormStatus(FormStatus::Rejected));
            }
        }
        effects.push(Effect::ScheduleStatusClear { delay_ms: self.status_clear_ms });
        effects
    }

    // --- Queries ---

    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    #[must_use]
    pub fn greeting(&self) -> Greeting {
        self.greeting
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.open
    }

    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn status(&self) -> FormStatus {
        self.status
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealSet {
        &self.reveal
    }
}
