//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and dialogs while reading/writing the
//! session and preference signals from Leptos context providers.

pub mod nav_bar;
pub mod password_modal;
pub mod pref_toggles;
