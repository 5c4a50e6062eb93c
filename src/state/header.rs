//! Header drop shadow driven by scroll offset.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::consts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderShadow {
    Raised,
    Flat,
}

impl HeaderShadow {
    /// Raised once the page has scrolled strictly past `threshold`.
    #[must_use]
    pub fn for_offset(scroll_y: f64, threshold: f64) -> Self {
        if scroll_y > threshold { Self::Raised } else { Self::Flat }
    }

    /// Value for the header's `box-shadow` property.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Raised => consts::HEADER_SHADOW,
            Self::Flat => consts::HEADER_NO_SHADOW,
        }
    }
}
