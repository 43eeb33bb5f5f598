//! Iranian phone-number validation for the login form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page validates on every keystroke and again right before the
//! remote user fetch. Both paths call `validate_phone_number`, so the inline
//! error and the submit error always agree.
//!
//! The raw input is never normalized: whatever validates is what gets
//! submitted.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

pub const REQUIRED_MESSAGE: &str = "Phone number is required";
pub const FORMAT_MESSAGE: &str = "The phone number format is not correct";

/// Pattern family a phone number matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PhoneKind {
    MobileNational,
    LandlineNational,
    MobileInternational,
    LandlineInternational,
}

/// Outcome of validating a raw phone-number string.
///
/// `is_valid` implies an empty `message`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    #[must_use]
    pub fn valid() -> Self {
        Self { is_valid: true, message: String::new() }
    }

    #[must_use]
    pub fn invalid(message: &str) -> Self {
        Self { is_valid: false, message: message.to_owned() }
    }
}

impl Default for ValidationResult {
    /// An untouched field shows no error.
    fn default() -> Self {
        Self::valid()
    }
}

// Checked in order; the first match wins. Digits are ASCII only: `\d` in
// `regex` also matches Persian and Arabic-Indic digits.
static PATTERNS: LazyLock<Vec<(PhoneKind, Regex)>> = LazyLock::new(|| {
    [
        (PhoneKind::MobileNational, r"^09[0-9]{9}$"),
        (PhoneKind::LandlineNational, r"^0[1-8][0-9]{9}$"),
        (PhoneKind::MobileInternational, r"^\+989[0-9]{9}$"),
        (PhoneKind::MobileInternational, r"^00989[0-9]{9}$"),
        (PhoneKind::LandlineInternational, r"^\+98[1-8][0-9]{9}$"),
        (PhoneKind::LandlineInternational, r"^0098[1-8][0-9]{9}$"),
    ]
    .into_iter()
    .filter_map(|(kind, pattern)| Regex::new(pattern).ok().map(|re| (kind, re)))
    .collect()
});

/// Strip surrounding whitespace, including a leading byte-order mark that
/// pasted text sometimes carries.
fn trim_input(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Return the pattern family `raw` (trimmed) belongs to, if any.
pub fn classify_phone_number(raw: &str) -> Option<PhoneKind> {
    let trimmed = trim_input(raw);
    PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(trimmed))
        .map(|(kind, _)| *kind)
}

/// Validate a raw phone-number string.
pub fn validate_phone_number(raw: &str) -> ValidationResult {
    if trim_input(raw).is_empty() {
        return ValidationResult::invalid(REQUIRED_MESSAGE);
    }
    if classify_phone_number(raw).is_none() {
        return ValidationResult::invalid(FORMAT_MESSAGE);
    }
    ValidationResult::valid()
}
