//! In-page navigation and the mobile menu.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Section id named by a same-page anchor href, e.g. `"#about"` -> `"about"`.
///
/// Returns `None` for anything the browser should navigate to itself.
#[must_use]
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Layout measurements taken when a nav link is clicked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Target section's offset from the top of the document, in CSS pixels.
    pub offset_top: f64,
    /// Rendered height of the fixed header. Zero when there is no header.
    pub header_height: f64,
}

impl SectionGeometry {
    /// Scroll position that lands the section just below the fixed header.
    #[must_use]
    pub fn scroll_top(self) -> f64 {
        self.offset_top - self.header_height
    }
}

/// Open/closed state shared by the toggle button and the menu panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Flip and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}
