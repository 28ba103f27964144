//! Roster Services Library
//!
//! Two small in-memory REST services share this library: the students API
//! and the contacts API. Each has its own binary under `src/bin/`.

pub mod api;
pub mod config;
pub mod error;
pub mod server;
/// In-memory record stores
///
/// Each service owns exactly one store for the lifetime of the process.
pub mod state;
pub mod validation;
