//! Errors reported by the host editor

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HostError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// A custom request was rejected by the host or the debug adapter.
    ///
    /// Displays the underlying text verbatim so it can be shown to the user
    /// without extra decoration.
    #[error("{0}")]
    Request(String),

    /// The host refused a factory or command registration
    #[error("Registration failed: {0}")]
    Registration(String),

    /// Releasing a registration failed
    #[error("Release failed: {0}")]
    Release(String),
}
