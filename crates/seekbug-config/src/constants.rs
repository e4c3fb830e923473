//! Well-known identifiers
//!
//! Centralizes the strings the host editor and the debug adapter agree on.
//! Changing any of these breaks existing user settings or keybindings.

/// Extension identifier, also the configuration section name
pub const EXTENSION_ID: &str = "seek-bug-dap";

/// Configuration section holding all SeekBug settings
pub const CONFIG_SECTION: &str = EXTENSION_ID;

/// Debugger type the descriptor factory is registered under
pub const DEBUGGER_TYPE: &str = "seek-bug-dap";

/// Configuration keys inside [`CONFIG_SECTION`]
pub mod keys {
    /// Overrides the debug adapter executable
    pub const EXECUTABLE_PATH: &str = "executable-path";
    /// Path handed to the suggestion service
    pub const DEEP_SEEK_LLM_PATH: &str = "deep-seek-llm-path";
}

/// Command identifiers registered with the host
pub mod commands {
    /// Ask the language model for a suggestion about the current session
    pub const AI_SUGGEST: &str = "seek-bug.aiSuggest";
}

/// User-facing text
pub mod messages {
    /// Prompt shown when asking for the suggestion question
    pub const AI_SUGGEST_PROMPT: &str = "Enter your AI suggestion question:";
    /// Shown when the suggestion command runs without a debug session
    pub const NO_ACTIVE_SESSION: &str = "No active debug session.";
    /// Prefix of a successful suggestion message
    pub const AI_SUGGESTION_PREFIX: &str = "AI Suggestion: ";
    /// Prefix of a failed suggestion message
    pub const ERROR_PREFIX: &str = "Error: ";
}
