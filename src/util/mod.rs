//! Shared utilities.
//!
//! - `runtime`: Tokio runtime helpers for async-to-sync bridges

mod runtime;

pub use runtime::run_async;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
