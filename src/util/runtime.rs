//! Tokio runtime helpers for async-to-sync bridges.

use std::future::Future;
use std::io;
use tokio::runtime::{Handle, RuntimeFlavor};

/// Run an async future to completion from synchronous code.
///
/// Inside a multi-threaded Tokio runtime the current worker is handed over
/// with `block_in_place`; outside any runtime a temporary current-thread
/// runtime is built. A current-thread runtime cannot be blocked from within
/// itself, so that case is reported as an error instead of deadlocking.
pub fn run_async<F, T>(future: F) -> io::Result<T>
where
    F: Future<Output = T>,
{
    match Handle::try_current() {
        Ok(handle) => match handle.runtime_flavor() {
            RuntimeFlavor::CurrentThread => Err(io::Error::other(
                "cannot block inside a current-thread runtime",
            )),
            _ => Ok(tokio::task::block_in_place(|| handle.block_on(future))),
        },
        Err(_) => {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            Ok(rt.block_on(future))
        }
    }
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod tests;
