//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior:
//! nothing happens while the session is still loading, and a settled session
//! without a user is sent to `/auth`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::User;
use crate::state::session::{SessionState, SharedSession};

pub const LOGIN_PATH: &str = "/auth";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// True once auth has loaded and no user is present.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// What the dashboard route shows for a given session.
#[derive(Clone, Debug, PartialEq)]
pub enum DashboardView {
    /// Session not settled yet; no navigation.
    Waiting,
    /// Unauthenticated; render nothing and leave for the login route.
    Redirect,
    /// Logout requested; shown until navigation completes.
    SigningOut,
    Profile(User),
}

impl DashboardView {
    pub fn resolve(state: &SessionState, signing_out: bool) -> Self {
        if signing_out {
            return Self::SigningOut;
        }
        if state.loading {
            return Self::Waiting;
        }
        match &state.user {
            Some(user) => Self::Profile(user.clone()),
            None => Self::Redirect,
        }
    }
}

/// Redirect to the login route whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: SharedSession, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let redirect = session.with(|s| should_redirect_unauth(s.state()));
        if redirect {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
