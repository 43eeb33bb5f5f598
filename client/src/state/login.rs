//! Login form state and the phone-number login flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login page keeps a `LoginForm` in a signal. A submit goes
//! `begin_submit` -> `authenticate` -> `complete`, and the page hands the
//! returned user to the session store. Only one submission may be pending;
//! the page disables the button and `begin_submit` refuses the rest.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors show the validator's message. Any remote failure shows
//! the same generic message; the detail goes to the log only.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::api::{ApiError, UserDirectory};
use crate::net::types::User;
use crate::util::validation::{ValidationResult, validate_phone_number};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("{0}")]
    Invalid(String),
    #[error("{}", LOGIN_FAILED_MESSAGE)]
    Fetch(#[source] ApiError),
}

/// Why a submit was refused before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    Pending,
    Invalid,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub phone: String,
    /// Live result for the current input.
    pub validation: ValidationResult,
    pub pending: bool,
    /// Error from the last submit, if it failed.
    pub error: Option<String>,
}

impl LoginForm {
    /// Store new input and re-validate it.
    pub fn set_phone(&mut self, value: String) {
        self.validation = validate_phone_number(&value);
        self.phone = value;
    }

    pub fn can_submit(&self) -> bool {
        self.validation.is_valid && !self.pending
    }

    /// Inline message under the input, empty when valid.
    pub fn field_error(&self) -> &str {
        &self.validation.message
    }

    /// Start a submission and return the phone number to submit.
    ///
    /// # Errors
    ///
    /// `Pending` while another submission is in flight, `Invalid` when the
    /// input fails validation (the message is recorded as the form error).
    pub fn begin_submit(&mut self) -> Result<String, SubmitRejected> {
        if self.pending {
            return Err(SubmitRejected::Pending);
        }
        let result = validate_phone_number(&self.phone);
        if !result.is_valid {
            self.error = Some(result.message.clone());
            self.validation = result;
            return Err(SubmitRejected::Invalid);
        }
        self.pending = true;
        self.error = None;
        Ok(self.phone.clone())
    }

    /// Finish the pending submission. Returns the user on success.
    pub fn complete(&mut self, outcome: Result<User, LoginError>) -> Option<User> {
        self.pending = false;
        match outcome {
            Ok(user) => {
                self.error = None;
                Some(user)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.pending { "Signing In..." } else { "Sign In" }
    }
}

/// Validate `phone` and fetch the user it logs in as.
///
/// # Errors
///
/// `Invalid` without contacting the directory when validation fails,
/// `Fetch` when the directory call fails.
pub async fn authenticate<D: UserDirectory>(phone: &str, directory: &D) -> Result<User, LoginError> {
    let result = validate_phone_number(phone);
    if !result.is_valid {
        return Err(LoginError::Invalid(result.message));
    }
    directory.fetch_user().await.map_err(|e| {
        log::warn!("user fetch failed: {e}");
        LoginError::Fetch(e)
    })
}
