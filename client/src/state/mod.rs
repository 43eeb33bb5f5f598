//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the app-wide authentication state; `login` is the form state
//! owned by the login page. Both are plain structs so they can be tested
//! without a reactive runtime, and are wrapped in `RwSignal`s by the pages.

pub mod login;
pub mod session;
