//! Extension construction options

use crate::resolver::{ConfiguredExecutableResolver, ExecutableResolverRef};
use seekbug_config::DEBUGGER_TYPE;
use seekbug_ports::WorkspaceConfigurationRef;
use std::sync::Arc;

/// What the extension registers and how it picks executables
#[derive(Clone)]
pub struct ExtensionOptions {
    /// Debugger type the descriptor factory is registered under
    pub debugger_type: String,
    pub resolver: ExecutableResolverRef,
}

impl ExtensionOptions {
    pub fn new(debugger_type: impl Into<String>, resolver: ExecutableResolverRef) -> Self {
        Self {
            debugger_type: debugger_type.into(),
            resolver,
        }
    }

    /// Defaults: the `seek-bug-dap` type, resolved from `workspace` settings
    pub fn standalone(workspace: WorkspaceConfigurationRef) -> Self {
        Self::new(
            DEBUGGER_TYPE,
            Arc::new(ConfiguredExecutableResolver::new(workspace)),
        )
    }
}

impl std::fmt::Debug for ExtensionOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtensionOptions")
            .field("debugger_type", &self.debugger_type)
            .finish_non_exhaustive()
    }
}
