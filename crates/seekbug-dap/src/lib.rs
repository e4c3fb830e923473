//! SeekBug DAP - the `aiRequest` contract
//!
//! The editor extension and the SeekBug debug adapter agree on exactly one
//! non-standard DAP request. This crate owns both ends of it:
//!
//! - [`AiRequestArguments`] / [`AiResponse`] - the wire shapes
//! - [`AiRequestHandler`] - the adapter side, routing `ai` subcommands to a
//!   [`SuggestionEngine`]
//!
//! Standard DAP traffic is handled by the host editor and the adapter; only
//! the [`Request`] and [`Response`] envelopes are modelled here.

pub mod ai;
pub mod constants;
pub mod error;
pub mod protocol;

pub use ai::{
    AiCommand, AiRequestArguments, AiRequestHandler, AiResponse, AiResponseBody,
    PlaceholderSuggestionEngine, SuggestionEngine, SuggestionEngineRef,
};
pub use error::{Error, Result};
pub use protocol::{Request, Response};
