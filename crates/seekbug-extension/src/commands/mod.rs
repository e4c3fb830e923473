//! Commands contributed to the host palette

mod ai_suggest;

pub use ai_suggest::AiSuggestCommand;

use crate::error::CommandError;

/// How a command invocation ended
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// The user dismissed the prompt or entered nothing
    Cancelled,
    /// There was no debug session to send the request to
    NoActiveSession,
    /// The adapter answered with this text
    Suggested(String),
    /// The request failed; the error was shown to the user
    Failed(CommandError),
}
