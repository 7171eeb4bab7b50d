//! Client state containers provided as `RwSignal` contexts.
//!
//! ARCHITECTURE
//! ============
//! State types are plain structs with synchronous transition methods; pages
//! wrap them in signals and call the transitions once async requests finish.

pub mod ads;
pub mod prefs;
pub mod profile;
pub mod session;
