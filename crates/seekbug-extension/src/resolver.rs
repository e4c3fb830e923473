//! Debug adapter executable resolution

use async_trait::async_trait;
use seekbug_ports::{DebugAdapterExecutable, DebugSession, WorkspaceConfigurationRef};
use std::sync::Arc;
use tracing::debug;

/// Thread-safe reference to an executable resolver
pub type ExecutableResolverRef = Arc<dyn ExecutableResolver>;

/// Decides which executable the host launches for a session
#[async_trait]
pub trait ExecutableResolver: Send + Sync {
    /// `default` is the host's own choice and may be `None`
    async fn resolve_executable(
        &self,
        session: &dyn DebugSession,
        default: Option<DebugAdapterExecutable>,
    ) -> Option<DebugAdapterExecutable>;
}

/// Uses `seek-bug-dap.executable-path` when it is set
///
/// The setting is read on every session start, scoped to the session's
/// folder, so edits apply to the next launch. The path is not checked for
/// existence; a bad path surfaces as a launch failure in the host.
pub struct ConfiguredExecutableResolver {
    workspace: WorkspaceConfigurationRef,
}

impl ConfiguredExecutableResolver {
    pub fn new(workspace: WorkspaceConfigurationRef) -> Self {
        Self { workspace }
    }
}

#[async_trait]
impl ExecutableResolver for ConfiguredExecutableResolver {
    async fn resolve_executable(
        &self,
        session: &dyn DebugSession,
        default: Option<DebugAdapterExecutable>,
    ) -> Option<DebugAdapterExecutable> {
        let settings = self.workspace.extension_settings(session.workspace_folder());

        match settings.executable_path() {
            Some(path) => {
                debug!(session = %session.id(), path = %path, "Using configured adapter executable");
                Some(DebugAdapterExecutable::new(path))
            }
            None => {
                debug!(
                    session = %session.id(),
                    default = ?default.as_ref().map(|e| &e.command),
                    "No executable configured, keeping host default"
                );
                default
            }
        }
    }
}
