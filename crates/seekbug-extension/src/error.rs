//! Error types for the extension

use seekbug_ports::HostError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommandError>;

/// Why a command could not produce its result
///
/// Both variants display the underlying message unchanged; the command
/// adds its own prefix when showing it to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    /// The host or the debug adapter rejected the request
    #[error(transparent)]
    Host(#[from] HostError),

    /// The request could not be built or the response had the wrong shape
    #[error(transparent)]
    Protocol(#[from] seekbug_dap::Error),
}

impl CommandError {
    /// Whether the adapter answered with something other than `{body: {output}}`
    pub fn is_malformed_response(&self) -> bool {
        matches!(
            self,
            CommandError::Protocol(seekbug_dap::Error::MalformedResponse(_))
        )
    }
}
