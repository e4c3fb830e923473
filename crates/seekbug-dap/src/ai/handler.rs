//! Adapter-side `aiRequest` handler
//!
//! Decodes the request, checks the configured model file, runs the `ai`
//! subcommand and wraps the outcome in a DAP response. Every failure
//! becomes an error response; the handler never panics on bad input.

use super::{AiCommand, AiRequestArguments, SuggestionEngineRef};
use crate::constants::requests;
use crate::{Error, Request, Response, Result};
use seekbug_config::validate_model_path;
use serde_json::json;
use std::path::PathBuf;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{debug, info, warn};

/// Handles `aiRequest` for the debug adapter
pub struct AiRequestHandler {
    engine: SuggestionEngineRef,
    next_seq: AtomicI64,
}

impl AiRequestHandler {
    pub fn new(engine: SuggestionEngineRef) -> Self {
        Self {
            engine,
            next_seq: AtomicI64::new(1),
        }
    }

    /// Whether this handler answers `command`
    pub fn handles(command: &str) -> bool {
        command == requests::AI_REQUEST
    }

    /// Answer one request
    pub async fn handle(&self, request: &Request) -> Response {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);

        match self.run(request).await {
            Ok(output) => Response::ok(seq, request, json!({ "output": output })),
            Err(e) => {
                warn!(request_seq = request.seq, error = %e, "aiRequest failed");
                Response::fail(seq, request, e.to_string())
            }
        }
    }

    async fn run(&self, request: &Request) -> Result<String> {
        if !Self::handles(&request.command) {
            return Err(Error::UnsupportedCommand(request.command.clone()));
        }

        let arguments = request
            .arguments
            .as_ref()
            .ok_or_else(|| Error::InvalidMessage("aiRequest without arguments".to_string()))?;
        let arguments = AiRequestArguments::from_value(arguments)?;

        let model = arguments
            .service_config_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(validate_model_path)
            .transpose()?;

        let command = AiCommand::parse(&arguments.command)?;
        info!(subcommand = command.name(), model = ?model, "Running ai command");

        match command {
            AiCommand::Suggest { question } => self.suggest(&question, model).await,
        }
    }

    async fn suggest(&self, question: &str, model: Option<PathBuf>) -> Result<String> {
        debug!(prompt = %question, "Suggestion prompt");
        self.engine.suggest(question, model.as_deref()).await
    }
}
