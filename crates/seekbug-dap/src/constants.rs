//! DAP protocol constants
//!
//! Centralizes the request and subcommand names the extension and the
//! debug adapter must agree on.

/// Non-standard DAP request names
pub mod requests {
    /// Forward an `ai` command line to the adapter
    pub const AI_REQUEST: &str = "aiRequest";
}

/// Subcommands of the adapter's `ai` command group
pub mod ai_commands {
    /// Ask the language model for a suggestion
    pub const SUGGEST: &str = "suggest";

    /// Every subcommand the adapter understands
    pub const ALL: &[&str] = &[SUGGEST];

    /// Usage line reported for `suggest` without a question
    pub const SUGGEST_USAGE: &str = "ai suggest <your question or context>";
}
