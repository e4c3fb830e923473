//! SeekBug editor extension
//!
//! Teaches the host editor to launch the SeekBug debug adapter and adds a
//! command that forwards a free-text question to it as an `aiRequest`.
//!
//! # Components
//!
//! - [`activate`] / [`ActivatedExtension`] - entry point; owns every host registration
//! - [`ConfiguredExecutableResolver`] - picks the adapter executable from settings
//! - [`SeekBugDescriptorFactory`] - the host's factory port, backed by a resolver
//! - [`AiSuggestCommand`] - the `seek-bug.aiSuggest` command
//! - [`DisposableContext`] - collect-and-continue teardown of registrations
//!
//! # Usage
//!
//! ```rust,ignore
//! let activated = seekbug_extension::activate(&host)?;
//! // ... host runs ...
//! let report = activated.deactivate();
//! ```

pub mod commands;
mod error;
mod extension;
mod factory;
pub mod lifecycle;
mod options;
mod resolver;

pub use commands::{AiSuggestCommand, CommandOutcome};
pub use error::{CommandError, Result};
pub use extension::{activate, activate_with, ActivatedExtension, SeekBugExtension};
pub use factory::SeekBugDescriptorFactory;
pub use lifecycle::{DisposableContext, ReleaseError, TeardownReport};
pub use options::ExtensionOptions;
pub use resolver::{ConfiguredExecutableResolver, ExecutableResolver, ExecutableResolverRef};
