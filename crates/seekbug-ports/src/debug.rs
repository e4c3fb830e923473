//! Debug-session ports
//!
//! The host spawns the debug adapter and speaks DAP to it. The extension
//! only decides *which* executable to spawn and may send extra custom
//! requests through an already running session.

use crate::{DebugAdapterDescriptorFactoryRef, DebugSessionRef, Result, Subscription, WorkspaceFolder};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Executable the host launches as the debug adapter
///
/// Produced fresh per session start and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugAdapterExecutable {
    /// Program to execute
    pub command: String,

    /// Arguments for the program
    #[serde(default)]
    pub args: Vec<String>,

    /// Working directory (host default when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,

    /// Extra environment variables
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub env: Vec<(String, String)>,
}

impl DebugAdapterExecutable {
    /// Executable with no arguments
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            cwd: None,
            env: Vec::new(),
        }
    }

    /// Add an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Add multiple arguments
    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set working directory
    pub fn cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Add environment variable
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

/// A running debug session, owned by the host
#[async_trait]
pub trait DebugSession: Send + Sync {
    /// Host-assigned session id
    fn id(&self) -> &str;

    /// Debugger type the session was started with
    fn debug_type(&self) -> &str;

    /// Folder the session's launch configuration belongs to
    fn workspace_folder(&self) -> Option<&WorkspaceFolder>;

    /// Send a non-standard request to the debug adapter and wait for the
    /// complete response message.
    ///
    /// There is no timeout; the host owns the request lifecycle.
    async fn custom_request(
        &self,
        command: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value>;
}

/// Produces the executable for a starting debug session
#[async_trait]
pub trait DebugAdapterDescriptorFactory: Send + Sync {
    /// `executable` is the host's own default, taken from the extension's
    /// declared debugger contribution. Returning `None` leaves the host
    /// without an adapter to launch.
    async fn create_debug_adapter_descriptor(
        &self,
        session: &dyn DebugSession,
        executable: Option<DebugAdapterExecutable>,
    ) -> Result<Option<DebugAdapterExecutable>>;
}

/// The host's debug subsystem
pub trait DebugHost: Send + Sync {
    /// Register `factory` for sessions of `debug_type`
    fn register_debug_adapter_descriptor_factory(
        &self,
        debug_type: &str,
        factory: DebugAdapterDescriptorFactoryRef,
    ) -> Result<Subscription>;

    /// Session currently focused in the debug UI
    fn active_debug_session(&self) -> Option<DebugSessionRef>;
}
