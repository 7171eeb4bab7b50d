//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guard, requests, local form
//! state) and delegates shared chrome to `components`.

pub mod discover;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
