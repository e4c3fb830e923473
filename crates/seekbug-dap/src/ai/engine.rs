//! Suggestion backend seam
//!
//! Model inference lives outside this repository. The adapter talks to it
//! through [`SuggestionEngine`]; [`PlaceholderSuggestionEngine`] answers
//! when no backend is linked in.

use crate::Result;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

/// Thread-safe reference to a suggestion engine
pub type SuggestionEngineRef = Arc<dyn SuggestionEngine>;

/// Produces a suggestion for a debugging question
#[async_trait]
pub trait SuggestionEngine: Send + Sync {
    /// `model` is the validated model file, when one was configured
    async fn suggest(&self, question: &str, model: Option<&Path>) -> Result<String>;
}

/// Echoes the question back with a fixed placeholder answer
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderSuggestionEngine;

#[async_trait]
impl SuggestionEngine for PlaceholderSuggestionEngine {
    async fn suggest(&self, question: &str, _model: Option<&Path>) -> Result<String> {
        Ok(format!(
            "[AI Suggestion] You asked: {}\n[AI Suggestion] Here's a placeholder suggestion from the AI.\n",
            question
        ))
    }
}
