//! In-memory implementations of the host ports
//!
//! These fakes implement the traits from `seekbug-ports` and record every
//! interaction so tests can assert on what the extension did.

mod commands;
mod debug;
mod host;
mod window;
mod workspace;

pub use commands::FakeCommandRegistry;
pub use debug::{FakeDebugHost, FakeDebugSession, SessionReply};
pub use host::FakeHost;
pub use window::ScriptedUserInterface;
pub use workspace::FakeWorkspace;

use std::sync::{Mutex, MutexGuard};

/// Lock ignoring poisoning; a panicking test must not cascade into others
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| e.into_inner())
}
