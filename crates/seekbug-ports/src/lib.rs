//! Port trait definitions for SeekBug
//!
//! The host editor owns the debug-session runtime, the configuration store,
//! the command palette and all user-facing UI. This crate describes that
//! plugin contract as traits so the extension can be driven by any host
//! (and by in-memory fakes in tests).
//!
//! # Port Types
//!
//! - **Workspace ports**: scoped configuration lookup, workspace folders
//! - **Debug ports**: descriptor factory registration, active session, custom requests
//! - **Command ports**: command registration and dispatch
//! - **Window ports**: input prompts and user-visible messages

mod commands;
mod debug;
mod error;
mod subscription;
mod window;
mod workspace;

pub use commands::{CommandHandler, CommandRegistry, HostContext};
pub use debug::{
    DebugAdapterDescriptorFactory, DebugAdapterExecutable, DebugHost, DebugSession,
};
pub use error::{HostError, Result};
pub use subscription::Subscription;
pub use window::{InputBoxOptions, UserInterface};
pub use workspace::{WorkspaceConfiguration, WorkspaceFolder};

use std::sync::Arc;

/// Thread-safe reference to a debug session
pub type DebugSessionRef = Arc<dyn DebugSession>;

/// Thread-safe reference to the host's debug subsystem
pub type DebugHostRef = Arc<dyn DebugHost>;

/// Thread-safe reference to a descriptor factory
pub type DebugAdapterDescriptorFactoryRef = Arc<dyn DebugAdapterDescriptorFactory>;

/// Thread-safe reference to the host's command registry
pub type CommandRegistryRef = Arc<dyn CommandRegistry>;

/// Thread-safe reference to a command handler
pub type CommandHandlerRef = Arc<dyn CommandHandler>;

/// Thread-safe reference to the host's UI surface
pub type UserInterfaceRef = Arc<dyn UserInterface>;

/// Thread-safe reference to the workspace configuration store
pub type WorkspaceConfigurationRef = Arc<dyn WorkspaceConfiguration>;
