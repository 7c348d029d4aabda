//! Lam CLI library.
//!
//! Everything the `lam` binary does lives here, so that option parsing and
//! error rendering can be tested without spawning a process.

pub mod commands;
pub mod input;
pub mod show;
mod tracing_setup;

pub use tracing_setup::init_tracing;
