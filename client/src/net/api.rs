//! Remote user directory: the mock profile source behind login.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): `ApiError::Unavailable`, since login only ever runs in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError`. The login flow collapses them all into one
//! generic message, so the variants exist for logging, not for the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{User, UserList};

pub const DEFAULT_USER_ENDPOINT: &str = "https://randomuser.me/api/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    #[error("response contained no users")]
    Empty,
    #[error("user directory is not available here")]
    Unavailable,
}

/// Source of user records for login.
#[allow(async_fn_in_trait)]
pub trait UserDirectory {
    /// Fetch one user record.
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` on transport, status, or decoding failure.
    async fn fetch_user(&self) -> Result<User, ApiError>;
}

/// `randomuser.me`-compatible HTTP directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomUserDirectory {
    endpoint: String,
}

impl RandomUserDirectory {
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for RandomUserDirectory {
    fn default() -> Self {
        Self::new(DEFAULT_USER_ENDPOINT)
    }
}

impl UserDirectory for RandomUserDirectory {
    async fn fetch_user(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            let body = resp
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            first_user(&body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }
}

/// Decode a directory response body and take its first record.
///
/// # Errors
///
/// `Decode` for malformed JSON, `Empty` when `results` has no entries.
pub fn first_user(body: &str) -> Result<User, ApiError> {
    let list: UserList = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    list.results.into_iter().next().ok_or(ApiError::Empty)
}
