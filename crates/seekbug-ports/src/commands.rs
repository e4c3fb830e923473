//! Command registration and dispatch

use crate::{
    CommandHandlerRef, CommandRegistryRef, DebugHostRef, Result, Subscription, UserInterfaceRef,
    WorkspaceConfigurationRef,
};
use async_trait::async_trait;

/// Everything the host exposes to the extension.
///
/// Handed to [`crate::CommandHandler::execute`] on every dispatch instead of
/// being reached through process-wide state.
#[derive(Clone)]
pub struct HostContext {
    pub debug: DebugHostRef,
    pub workspace: WorkspaceConfigurationRef,
    pub window: UserInterfaceRef,
    pub commands: CommandRegistryRef,
}

impl std::fmt::Debug for HostContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostContext").finish_non_exhaustive()
    }
}

/// A command invoked from the palette or a menu
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Run the command. Failures are reported to the user by the handler
    /// itself; nothing is returned to the host.
    async fn execute(&self, host: &HostContext);
}

/// The host's command palette
pub trait CommandRegistry: Send + Sync {
    /// Bind `handler` to `command_id`
    fn register_command(&self, command_id: &str, handler: CommandHandlerRef)
        -> Result<Subscription>;
}
