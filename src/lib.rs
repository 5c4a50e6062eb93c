//! # portfolio-page
//!
//! Client-side behaviour for a static portfolio page, compiled to
//! WebAssembly and bound to markup that already exists in the HTML.
//!
//! The page logic lives in a browser-free core so it can be tested natively;
//! the `hydrate` feature adds the web-sys layer that feeds DOM events into the
//! core and applies what comes back.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | `Event` -> `Effect` dispatch over all page state |
//! | [`state`] | Theme, greeting, nav/menu, contact form, reveal set, header shadow |
//! | [`config`] | `PageConfig`, read from an optional `#page-config` JSON block |
//! | [`consts`] | Element ids, selectors, and fixed UI values |
//! | [`error`] | Startup errors |
//! | `dom` | Listener, timer and observer wiring (`hydrate` only) |

pub mod config;
pub mod consts;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod engine;
pub mod error;
pub mod state;
