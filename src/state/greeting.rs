//! Time-of-day greeting.

#[cfg(test)]
#[path = "greeting_test.rs"]
mod greeting_test;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    Fallback,
}

impl Greeting {
    /// Map a local wall-clock hour (0-23) onto half-open greeting windows.
    #[must_use]
    pub fn for_hour(hour: u32) -> Self {
        match hour {
            5..12 => Self::Morning,
            12..17 => Self::Afternoon,
            17..22 => Self::Evening,
            _ => Self::Fallback,
        }
    }

    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Morning => "Good morning! ☀️",
            Self::Afternoon => "Good afternoon! 👋",
            Self::Evening => "Good evening! 🌙",
            Self::Fallback => "Hello there! ✨",
        }
    }
}
