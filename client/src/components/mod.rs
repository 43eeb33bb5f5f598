//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take values, signals, and callbacks
//! as props and never touch the session store directly.

pub mod button;
pub mod profile_card;
pub mod text_field;
