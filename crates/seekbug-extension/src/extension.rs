//! Extension entry point
//!
//! [`activate`] wires everything into the host and returns an
//! [`ActivatedExtension`] that owns every registration. Dropping it without
//! calling [`ActivatedExtension::deactivate`] leaves the registrations in
//! place.
//!
//! Activation does not install a tracing subscriber; the embedding host owns
//! the process and calls `seekbug_logging::init` once before activating:
//!
//! ```rust,ignore
//! if let Err(e) = seekbug_logging::init(seekbug_logging::LogConfig::for_extension(verbose)) {
//!     eprintln!("logging already initialised: {e}");
//! }
//! let activated = seekbug_extension::activate(&host)?;
//! // ...
//! activated.deactivate();
//! ```

use crate::commands::AiSuggestCommand;
use crate::factory::SeekBugDescriptorFactory;
use crate::lifecycle::{DisposableContext, TeardownReport};
use crate::options::ExtensionOptions;
use seekbug_config::constants::commands;
use seekbug_ports::{DebugHost, HostContext, HostError};
use std::sync::Arc;
use tracing::{info, warn};

/// The descriptor factory registration for one debugger type
#[derive(Debug)]
pub struct SeekBugExtension {
    options: ExtensionOptions,
    context: DisposableContext,
}

impl SeekBugExtension {
    /// Register the descriptor factory for `options.debugger_type`
    pub fn new(options: ExtensionOptions, debug: &dyn DebugHost) -> Result<Self, HostError> {
        let factory = Arc::new(SeekBugDescriptorFactory::new(options.resolver.clone()));
        let subscription =
            debug.register_debug_adapter_descriptor_factory(&options.debugger_type, factory)?;

        let context = DisposableContext::new(format!("extension:{}", options.debugger_type));
        context.push_subscription(subscription);

        info!(debug_type = %options.debugger_type, "Registered descriptor factory");
        Ok(Self { options, context })
    }

    pub fn debugger_type(&self) -> &str {
        &self.options.debugger_type
    }

    pub fn options(&self) -> &ExtensionOptions {
        &self.options
    }

    /// Unregister the factory
    pub fn dispose(&self) -> TeardownReport {
        self.context.teardown()
    }
}

/// Everything [`activate`] registered
#[derive(Debug)]
pub struct ActivatedExtension {
    extension: Arc<SeekBugExtension>,
    context: DisposableContext,
}

impl ActivatedExtension {
    pub fn extension(&self) -> &SeekBugExtension {
        &self.extension
    }

    /// Release every registration, the command first and the factory last
    pub fn deactivate(&self) -> TeardownReport {
        let report = self.context.teardown();
        if !report.is_clean() {
            warn!(failures = report.failures.len(), "Deactivation finished with errors");
        }
        report
    }

    pub fn is_active(&self) -> bool {
        !self.context.is_torn_down()
    }
}

/// Activate the extension against `host`.
///
/// Registers the descriptor factory for `seek-bug-dap` and the
/// `seek-bug.aiSuggest` command. If any registration fails, whatever was
/// already registered is released before the error is returned.
pub fn activate(host: &HostContext) -> Result<ActivatedExtension, HostError> {
    activate_with(host, ExtensionOptions::standalone(host.workspace.clone()))
}

/// [`activate`] with custom options
pub fn activate_with(
    host: &HostContext,
    options: ExtensionOptions,
) -> Result<ActivatedExtension, HostError> {
    let context = DisposableContext::new("seek-bug");

    let extension = Arc::new(SeekBugExtension::new(options, host.debug.as_ref())?);
    let ext = extension.clone();
    context.register_for_cleanup(
        format!("extension:{}", extension.debugger_type()),
        move || {
            let report = ext.dispose();
            if report.is_clean() {
                Ok(())
            } else {
                let reasons: Vec<_> = report.failures.iter().map(ToString::to_string).collect();
                Err(reasons.join("; "))
            }
        },
    );

    let registration = host
        .commands
        .register_command(commands::AI_SUGGEST, Arc::new(AiSuggestCommand::new()));
    match registration {
        Ok(subscription) => context.push_subscription(subscription),
        Err(e) => {
            warn!(command = commands::AI_SUGGEST, error = %e, "Activation failed, rolling back");
            context.teardown();
            return Err(e);
        }
    }

    info!(
        debug_type = %extension.debugger_type(),
        command = commands::AI_SUGGEST,
        "SeekBug activated"
    );
    Ok(ActivatedExtension { extension, context })
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekbug_testing::FakeHost;

    #[test]
    fn test_activate_registers_factory_and_command() {
        let host = FakeHost::new();
        let activated = activate(&host.context()).unwrap();

        assert_eq!(host.debug.registered_types(), vec!["seek-bug-dap"]);
        assert_eq!(host.commands.registered_commands(), vec!["seek-bug.aiSuggest"]);
        assert_eq!(activated.extension().debugger_type(), "seek-bug-dap");
        assert!(activated.is_active());
    }

    #[test]
    fn test_deactivate_releases_everything() {
        let host = FakeHost::new();
        let activated = activate(&host.context()).unwrap();

        let report = activated.deactivate();

        assert!(report.is_clean());
        assert_eq!(report.released, 2);
        assert!(host.debug.registered_types().is_empty());
        assert!(host.commands.registered_commands().is_empty());
        assert!(!activated.is_active());
        assert_eq!(activated.deactivate().invoked(), 0);
    }

    #[test]
    fn test_failed_command_registration_rolls_back_factory() {
        let host = FakeHost::new();
        host.commands.refuse(commands::AI_SUGGEST);

        let err = activate(&host.context()).unwrap_err();

        assert!(matches!(err, HostError::Registration(_)));
        assert!(host.debug.registered_types().is_empty());
    }

    #[test]
    fn test_failed_factory_registration_registers_nothing() {
        let host = FakeHost::new();
        host.debug.refuse_registrations(true);

        assert!(activate(&host.context()).is_err());
        assert!(host.commands.registered_commands().is_empty());
    }

    #[test]
    fn test_extension_disposed_early_is_not_released_twice() {
        let host = FakeHost::new();
        let activated = activate(&host.context()).unwrap();
        assert!(activated.extension().dispose().is_clean());
        assert!(host.debug.registered_types().is_empty());

        let report = activated.deactivate();

        assert!(report.is_clean());
        assert_eq!(report.released, 2);
        assert!(host.commands.registered_commands().is_empty());
    }
}
