//! Networking modules for the remote user directory.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single remote call the app makes, and `types` defines
//! the profile record it returns.

pub mod api;
pub mod types;
