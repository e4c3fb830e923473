//! All fakes wired together

use super::{FakeCommandRegistry, FakeDebugHost, FakeWorkspace, ScriptedUserInterface};
use seekbug_ports::HostContext;
use std::sync::Arc;

/// A complete fake host
///
/// Keeps concrete handles for assertions and hands out a [`HostContext`]
/// backed by the same objects.
#[derive(Clone, Default)]
pub struct FakeHost {
    pub debug: Arc<FakeDebugHost>,
    pub workspace: Arc<FakeWorkspace>,
    pub window: Arc<ScriptedUserInterface>,
    pub commands: Arc<FakeCommandRegistry>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn context(&self) -> HostContext {
        HostContext {
            debug: self.debug.clone(),
            workspace: self.workspace.clone(),
            window: self.window.clone(),
            commands: self.commands.clone(),
        }
    }

    /// Invoke a registered command through the fake palette
    pub async fn invoke(&self, command_id: &str) -> bool {
        self.commands.invoke(command_id, &self.context()).await
    }
}
