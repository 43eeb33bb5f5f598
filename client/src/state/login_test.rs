use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::state::session::{SessionStore, STORAGE_KEY};
use crate::test_support::sample_user;
use crate::util::storage::{DurableStorage, MemoryStorage};
use crate::util::validation::{FORMAT_MESSAGE, REQUIRED_MESSAGE};

/// Directory returning a scripted outcome and counting calls.
struct ScriptedDirectory {
    outcome: Result<User, ApiError>,
    calls: Cell<usize>,
}

impl ScriptedDirectory {
    fn ok() -> Self {
        Self { outcome: Ok(sample_user()), calls: Cell::new(0) }
    }

    fn failing(err: ApiError) -> Self {
        Self { outcome: Err(err), calls: Cell::new(0) }
    }
}

impl UserDirectory for ScriptedDirectory {
    async fn fetch_user(&self) -> Result<User, ApiError> {
        self.calls.set(self.calls.get() + 1);
        self.outcome.clone()
    }
}

fn form_with(phone: &str) -> LoginForm {
    let mut form = LoginForm::default();
    form.set_phone(phone.to_owned());
    form
}

// =============================================================
// Form input
// =============================================================

#[test]
fn fresh_form_shows_no_error_and_sign_in_label() {
    let form = LoginForm::default();
    assert_eq!(form.field_error(), "");
    assert_eq!(form.submit_label(), "Sign In");
    assert!(form.error.is_none());
}

#[test]
fn set_phone_validates_each_input() {
    let mut form = form_with("0912");
    assert_eq!(form.field_error(), FORMAT_MESSAGE);
    assert!(!form.can_submit());

    form.set_phone("09123456789".to_owned());
    assert_eq!(form.field_error(), "");
    assert!(form.can_submit());

    form.set_phone(String::new());
    assert_eq!(form.field_error(), REQUIRED_MESSAGE);
}

// =============================================================
// Submission gating
// =============================================================

#[test]
fn begin_submit_marks_pending_and_returns_raw_phone() {
    let mut form = form_with(" 09123456789 ");
    assert_eq!(form.begin_submit(), Ok(" 09123456789 ".to_owned()));
    assert!(form.pending);
    assert!(!form.can_submit());
    assert_eq!(form.submit_label(), "Signing In...");
}

#[test]
fn second_submit_while_pending_is_rejected() {
    let mut form = form_with("09123456789");
    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(SubmitRejected::Pending));
    assert!(form.pending);
}

#[test]
fn invalid_submit_records_validator_message() {
    let mut form = form_with("1234");
    assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid));
    assert!(!form.pending);
    assert_eq!(form.error.as_deref(), Some(FORMAT_MESSAGE));
}

#[test]
fn empty_submit_records_required_message() {
    let mut form = LoginForm::default();
    assert_eq!(form.begin_submit(), Err(SubmitRejected::Invalid));
    assert_eq!(form.error.as_deref(), Some(REQUIRED_MESSAGE));
    assert_eq!(form.field_error(), REQUIRED_MESSAGE);
}

#[test]
fn new_submit_clears_previous_error() {
    let mut form = form_with("09123456789");
    form.error = Some(LOGIN_FAILED_MESSAGE.to_owned());
    form.begin_submit().unwrap();
    assert!(form.error.is_none());
}

// =============================================================
// authenticate
// =============================================================

#[test]
fn authenticate_invalid_phone_never_calls_directory() {
    let dir = ScriptedDirectory::ok();
    let result = block_on(authenticate("1234", &dir));
    assert_eq!(result, Err(LoginError::Invalid(FORMAT_MESSAGE.to_owned())));
    assert_eq!(dir.calls.get(), 0);
}

#[test]
fn authenticate_valid_phone_returns_directory_user() {
    let dir = ScriptedDirectory::ok();
    let result = block_on(authenticate("09123456789", &dir));
    assert_eq!(result, Ok(sample_user()));
    assert_eq!(dir.calls.get(), 1);
}

#[test]
fn authenticate_maps_every_remote_failure_to_generic_message() {
    for err in [
        ApiError::Network("offline".to_owned()),
        ApiError::Status(500),
        ApiError::Decode("eof".to_owned()),
        ApiError::Empty,
    ] {
        let dir = ScriptedDirectory::failing(err.clone());
        let result = block_on(authenticate("09123456789", &dir));
        assert_eq!(result, Err(LoginError::Fetch(err)));
        assert_eq!(result.unwrap_err().to_string(), LOGIN_FAILED_MESSAGE);
    }
}

// =============================================================
// Full submit cycle against a session
// =============================================================

#[test]
fn successful_submit_logs_the_user_in() {
    let mut session = SessionStore::new(MemoryStorage::new());
    session.initialize();
    let mut form = form_with("09123456789");
    let dir = ScriptedDirectory::ok();

    let phone = form.begin_submit().unwrap();
    let outcome = block_on(authenticate(&phone, &dir));
    if let Some(user) = form.complete(outcome) {
        session.login(user);
    }

    assert!(!form.pending);
    assert!(form.error.is_none());
    assert_eq!(session.user(), Some(&sample_user()));
    assert!(session.storage().get_item(STORAGE_KEY).is_some());
}

#[test]
fn failed_fetch_leaves_session_unchanged() {
    let mut session = SessionStore::new(MemoryStorage::new());
    session.initialize();
    let before = session.state().clone();
    let mut form = form_with("09123456789");
    let dir = ScriptedDirectory::failing(ApiError::Network("connection refused".to_owned()));

    let phone = form.begin_submit().unwrap();
    let outcome = block_on(authenticate(&phone, &dir));
    if let Some(user) = form.complete(outcome) {
        session.login(user);
    }

    assert!(!form.pending);
    assert_eq!(form.error.as_deref(), Some("Login failed. Please try again."));
    assert_eq!(session.state(), &before);
    assert!(!session.is_authenticated());
    assert!(session.storage().is_empty());
}

#[test]
fn form_can_resubmit_after_failure() {
    let mut form = form_with("09123456789");
    form.begin_submit().unwrap();
    form.complete(Err(LoginError::Fetch(ApiError::Empty)));
    assert!(form.can_submit());
    assert!(form.begin_submit().is_ok());
}
