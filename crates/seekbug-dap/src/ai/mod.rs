//! The `aiRequest` custom request
//!
//! - `payload` - request arguments and response body as they travel over DAP
//! - `command` - parsing of the `ai <subcommand> ...` line carried in the payload
//! - `engine` - the suggestion backend seam
//! - `handler` - the adapter-side request handler

mod command;
mod engine;
mod handler;
mod payload;

pub use command::AiCommand;
pub use engine::{PlaceholderSuggestionEngine, SuggestionEngine, SuggestionEngineRef};
pub use handler::AiRequestHandler;
pub use payload::{AiRequestArguments, AiResponse, AiResponseBody};
