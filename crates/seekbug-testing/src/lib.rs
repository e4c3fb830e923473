//! Test utilities for SeekBug
//!
//! This crate provides in-memory fakes of every host port so the extension
//! can be activated and driven without an editor.
//!
//! # Fakes
//!
//! - [`FakeWorkspace`] - Scoped configuration store with workspace folders
//! - [`FakeDebugHost`] - Factory registry, active session, session start simulation
//! - [`FakeDebugSession`] - Session with a scripted or handler-backed `custom_request`
//! - [`FakeCommandRegistry`] - Command palette that can invoke registered handlers
//! - [`ScriptedUserInterface`] - Queued prompt answers, recorded messages
//! - [`FakeHost`] - All of the above wired into a [`seekbug_ports::HostContext`]
//!
//! # Usage
//!
//! ```no_run
//! use seekbug_testing::{FakeHost, FakeDebugSession};
//! use std::sync::Arc;
//!
//! let host = FakeHost::new();
//! host.window.answer(Some("why is x null"));
//! host.debug.set_active_session(Some(Arc::new(FakeDebugSession::new("s1"))));
//! let ctx = host.context();
//! ```

mod fakes;
pub mod proptest_config;

pub use fakes::{
    FakeCommandRegistry, FakeDebugHost, FakeDebugSession, FakeHost, FakeWorkspace,
    ScriptedUserInterface, SessionReply,
};
