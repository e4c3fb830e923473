//! Descriptor factory registered with the host

use crate::resolver::ExecutableResolverRef;
use async_trait::async_trait;
use seekbug_ports::{
    DebugAdapterDescriptorFactory, DebugAdapterExecutable, DebugSession, Result,
};
use tracing::{info, warn};

/// Implements the host's factory port on top of an [`crate::ExecutableResolver`]
pub struct SeekBugDescriptorFactory {
    resolver: ExecutableResolverRef,
}

impl SeekBugDescriptorFactory {
    pub fn new(resolver: ExecutableResolverRef) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DebugAdapterDescriptorFactory for SeekBugDescriptorFactory {
    async fn create_debug_adapter_descriptor(
        &self,
        session: &dyn DebugSession,
        executable: Option<DebugAdapterExecutable>,
    ) -> Result<Option<DebugAdapterExecutable>> {
        let resolved = self.resolver.resolve_executable(session, executable).await;

        match &resolved {
            Some(exe) => info!(
                session = %session.id(),
                command = %exe.command,
                args = ?exe.args,
                "Launching debug adapter"
            ),
            None => warn!(
                session = %session.id(),
                debug_type = %session.debug_type(),
                "No debug adapter executable available"
            ),
        }

        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::ConfiguredExecutableResolver;
    use seekbug_config::constants::keys;
    use seekbug_config::CONFIG_SECTION;
    use seekbug_testing::{FakeDebugSession, FakeWorkspace};
    use std::sync::Arc;

    fn factory(workspace: &Arc<FakeWorkspace>) -> SeekBugDescriptorFactory {
        SeekBugDescriptorFactory::new(Arc::new(ConfiguredExecutableResolver::new(
            workspace.clone(),
        )))
    }

    #[tokio::test]
    async fn test_factory_uses_resolver() {
        let workspace = Arc::new(FakeWorkspace::new());
        workspace.set(CONFIG_SECTION, keys::EXECUTABLE_PATH, "/opt/seek-bug-dap");
        let session = FakeDebugSession::new("s1");

        let exe = factory(&workspace)
            .create_debug_adapter_descriptor(&session, None)
            .await
            .unwrap();

        assert_eq!(exe, Some(DebugAdapterExecutable::new("/opt/seek-bug-dap")));
    }

    #[tokio::test]
    async fn test_nothing_resolved_is_not_an_error() {
        let workspace = Arc::new(FakeWorkspace::new());
        let session = FakeDebugSession::new("s1");

        let exe = factory(&workspace)
            .create_debug_adapter_descriptor(&session, None)
            .await
            .unwrap();

        assert_eq!(exe, None);
    }
}
