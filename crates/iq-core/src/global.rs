//! Process-wide default runner.
//!
//! Built on first use from the environment (see [`crate::config`]), so a
//! program can call [`print`] unconditionally and control output with
//! `DEBUG_CURL` / `DEBUG_HTTPIE` / `NO_REDACT`.
//!
//! [`set`] swaps in another runner, typically in tests. Swapping is
//! atomic, but a `print` already running keeps using the runner it
//! started with. Configure the replacement fully before handing it over.

use crate::error::PrintError;
use crate::runner::Runner;
use iq_common::Request;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

static DEFAULT: OnceLock<RwLock<Arc<Runner>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Runner>> {
    DEFAULT.get_or_init(|| RwLock::new(Arc::new(Runner::from_env())))
}

/// The current default runner.
pub fn get() -> Arc<Runner> {
    Arc::clone(&slot().read().unwrap_or_else(PoisonError::into_inner))
}

/// Replace the default runner.
pub fn set(runner: Runner) {
    *slot().write().unwrap_or_else(PoisonError::into_inner) = Arc::new(runner);
}

/// Print `request` with the default runner.
pub fn print(request: &mut Request) -> Result<(), PrintError> {
    get().print(request)
}

pub fn enable() {
    get().enable();
}

pub fn disable() {
    get().disable();
}

pub fn is_enabled() -> bool {
    get().is_enabled()
}
