//! Shared constants: the DOM contract with the page markup and fixed UI text.

// ── Element ids ─────────────────────────────────────────────────

pub const HEADER_ID: &str = "header";
pub const NAV_TOGGLE_ID: &str = "nav-toggle";
pub const NAV_MENU_ID: &str = "nav-menu";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";
pub const GREETING_ID: &str = "greeting";
pub const CONTACT_FORM_ID: &str = "contact-form";
pub const FORM_STATUS_ID: &str = "form-status";
pub const PAGE_CONFIG_ID: &str = "page-config";

/// Suffix appended to a field id to find its error text node.
pub const ERROR_ID_SUFFIX: &str = "-error";

// ── Selectors and classes ───────────────────────────────────────

pub const NAV_LINK_SELECTOR: &str = ".nav-link";

/// Elements faded in on first intersection.
pub const REVEAL_SELECTORS: [&str; 4] = [".about-card", ".skill-card", ".project-card", ".contact-form"];

pub const REVEAL_CLASS: &str = "fade-in";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Class shared by the nav toggle button and the menu panel while open.
pub const MENU_ACTIVE_CLASS: &str = "active";

/// Attribute on `<html>` carrying the active theme.
pub const THEME_ATTR: &str = "data-theme";

// ── Theme ───────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ── Timing ──────────────────────────────────────────────────────

pub const GREETING_REFRESH_MS: u32 = 60_000;
pub const STATUS_CLEAR_MS: u32 = 5_000;

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical offset, in CSS pixels, past which the header gets its shadow.
pub const HEADER_SHADOW_OFFSET_PX: f64 = 50.0;
pub const HEADER_SHADOW: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1)";
pub const HEADER_NO_SHADOW: &str = "none";

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Form ────────────────────────────────────────────────────────

pub const ERROR_BORDER_COLOR: &str = "#ef4444";
pub const NAME_MIN_CHARS: usize = 2;
pub const MESSAGE_MIN_CHARS: usize = 10;
