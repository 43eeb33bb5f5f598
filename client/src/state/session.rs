//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionStore` is created by the root component and handed to the
//! login and dashboard pages as a prop. It is the only place the current user
//! lives, and the only code that touches the `auth_user` storage key.
//!
//! LIFECYCLE
//! =========
//! `Loading` until `initialize` reads storage, then `Unauthenticated` or
//! `Authenticated`. `login`/`logout` move between the settled states and
//! write storage in the same call.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::RwSignal;

use crate::net::types::User;
use crate::util::storage::{BrowserStorage, DurableStorage};

/// Storage key holding the JSON-serialized user.
pub const STORAGE_KEY: &str = "auth_user";

/// Session store as shared between pages.
pub type SharedSession = RwSignal<SessionStore<BrowserStorage>>;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn status(&self) -> SessionStatus {
        if self.loading {
            SessionStatus::Loading
        } else if self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Unauthenticated,
    Authenticated,
}

/// Session state plus the storage it is persisted to.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    state: SessionState,
    storage: S,
}

impl<S: DurableStorage> SessionStore<S> {
    /// A store in the `Loading` state. Call `initialize` to settle it.
    pub fn new(storage: S) -> Self {
        Self { state: SessionState::default(), storage }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Restore the session from storage. Only the first call while loading
    /// has any effect.
    pub fn initialize(&mut self) {
        if !self.state.loading {
            return;
        }
        if let Some(raw) = self.storage.get_item(STORAGE_KEY) {
            match serde_json::from_str::<User>(&raw) {
                Ok(user) => {
                    log::debug!("restored session for {}", user.email);
                    self.state.user = Some(user);
                }
                Err(e) => {
                    log::warn!("discarding unreadable stored user: {e}");
                    self.storage.remove_item(STORAGE_KEY);
                }
            }
        }
        self.state.loading = false;
    }

    /// Authenticate as `user` and persist it.
    ///
    /// The in-memory session is set even if the storage write fails; the
    /// user then stays signed in until the page is reloaded.
    pub fn login(&mut self, user: User) {
        match serde_json::to_string(&user) {
            Ok(raw) => {
                if let Err(e) = self.storage.set_item(STORAGE_KEY, &raw) {
                    log::warn!("could not persist session: {e}");
                }
            }
            Err(e) => log::warn!("could not serialize user: {e}"),
        }
        self.state.user = Some(user);
        self.state.loading = false;
    }

    /// Drop the current user and its stored record.
    pub fn logout(&mut self) {
        if self.state.user.take().is_some() {
            log::debug!("session cleared");
        }
        self.storage.remove_item(STORAGE_KEY);
    }
}
