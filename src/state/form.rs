//! Contact form validation and simulated submission.
//!
//! Each field moves between `Untouched`, `Valid` and `Invalid`. Blur checks a
//! single field and lets an empty one fall back to `Untouched`; submit checks
//! all three including the "required" rule. Values are trimmed before any
//! rule runs. Lengths count UTF-16 code units, the unit browsers use for
//! `String.length` and `maxlength`.
//!
//! Submission never leaves the page: a valid form is reported as sent and
//! its values are reset.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::consts;

const EMAIL_PATTERN_SRC: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Compiled once. The source is a constant, so an error here is a build-time
/// mistake; it is logged and every address is then rejected.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(EMAIL_PATTERN_SRC) {
    Ok(re) => Some(re),
    Err(err) => {
        log::error!("email pattern failed to compile: {err}");
        None
    }
});

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// Length as the browser reports it for a text field.
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Element id of the input; the error node is this plus `-error`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    #[must_use]
    pub fn error_id(self) -> String {
        format!("{}{}", self.id(), consts::ERROR_ID_SUFFIX)
    }

    fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }
}

/// Rule violations, displayed verbatim next to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be at least 2 characters")]
    NameTooShort,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailInvalid,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

impl Field {
    /// Format/length rule for a non-empty, trimmed value.
    fn check_content(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Name if utf16_len(value) < consts::NAME_MIN_CHARS => Err(FieldError::NameTooShort),
            Self::Email if !is_valid_email(value) => Err(FieldError::EmailInvalid),
            Self::Message if utf16_len(value) < consts::MESSAGE_MIN_CHARS => {
                Err(FieldError::MessageTooShort)
            }
            _ => Ok(()),
        }
    }

    fn required_error(self) -> FieldError {
        match self {
            Self::Name => FieldError::NameRequired,
            Self::Email => FieldError::EmailRequired,
            Self::Message => FieldError::MessageRequired,
        }
    }

    /// Full rule set used on submit.
    ///
    /// # Errors
    ///
    /// Returns the first rule the trimmed value breaks.
    pub fn validate(self, raw: &str) -> Result<(), FieldError> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(self.required_error());
        }
        self.check_content(value)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    #[default]
    Untouched,
    Valid,
    Invalid(FieldError),
}

impl FieldStatus {
    #[must_use]
    pub fn error(self) -> Option<FieldError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub status: FieldStatus,
}

/// Raw values read from the three inputs at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }
}

/// Status line under the form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Sent,
    Rejected,
}

impl FormStatus {
    #[must_use]
    pub fn text(self) -> &'static str {
        match self {
            Self::Idle => "",
            Self::Sent => "Message sent successfully! ✓",
            Self::Rejected => "Please fix the errors above",
        }
    }

    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Idle => "form-status",
            Self::Sent => "form-status success",
            Self::Rejected => "form-status error",
        }
    }
}

/// Result of a submit attempt, with the per-field errors found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Rejected(Vec<(Field, FieldError)>),
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: [FieldState; 3],
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        &self.fields[field.index()]
    }

    /// Validate one field after it loses focus.
    pub fn blur(&mut self, field: Field, raw: &str) -> FieldStatus {
        let value = raw.trim();
        let status = if value.is_empty() {
            FieldStatus::Untouched
        } else {
            match field.check_content(value) {
                Ok(()) => FieldStatus::Valid,
                Err(err) => FieldStatus::Invalid(err),
            }
        };
        let state = &mut self.fields[field.index()];
        state.value = raw.to_owned();
        state.status = status;
        status
    }

    /// Validate every field and, when all pass, simulate sending by resetting
    /// the stored values.
    pub fn submit(&mut self, values: &FormValues) -> SubmitOutcome {
        let mut errors = Vec::new();
        for field in Field::ALL {
            let raw = values.get(field);
            let state = &mut self.fields[field.index()];
            state.value = raw.to_owned();
            state.status = match field.validate(raw) {
                Ok(()) => FieldStatus::Valid,
                Err(err) => {
                    errors.push((field, err));
                    FieldStatus::Invalid(err)
                }
            };
        }

        if errors.is_empty() {
            self.reset();
            SubmitOutcome::Sent
        } else {
            SubmitOutcome::Rejected(errors)
        }
    }

    pub fn reset(&mut self) {
        self.fields = Default::default();
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| matches!(f.status, FieldStatus::Invalid(_)))
    }
}
