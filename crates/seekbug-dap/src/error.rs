//! Error types for the `aiRequest` contract

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Arguments that do not decode as [`crate::AiRequestArguments`]
    #[error("Invalid message format: {0}")]
    InvalidMessage(String),

    /// A response did not have the `{body: {output}}` shape
    #[error("malformed aiRequest response: {0}")]
    MalformedResponse(String),

    /// The request named something other than `aiRequest`
    #[error("Unsupported command: {0}")]
    UnsupportedCommand(String),

    /// The `ai` command line named no known subcommand
    #[error("Unknown ai subcommand '{found}'. Available: {available}")]
    UnknownSubcommand { found: String, available: String },

    /// A known subcommand was given bad arguments
    #[error("Usage: {0}")]
    Usage(String),

    /// The configured model file cannot be used
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// The suggestion engine failed
    #[error("Suggestion failed: {0}")]
    Engine(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidMessage(err.to_string())
    }
}

impl From<seekbug_config::ModelPathError> for Error {
    fn from(err: seekbug_config::ModelPathError) -> Self {
        Error::InvalidModel(err.to_string())
    }
}
