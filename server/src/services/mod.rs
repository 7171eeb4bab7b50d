//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and persistence concerns so route
//! handlers can stay focused on protocol translation and auth plumbing.
//! [`account::AccountService`] is the single entry point the routes use; the
//! other modules are its building blocks.

pub mod account;
pub mod cache;
pub mod password;
pub mod repo;
pub mod token;
pub mod user;
