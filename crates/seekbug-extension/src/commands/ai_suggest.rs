//! `seek-bug.aiSuggest`: ask the debug adapter for a suggestion
//!
//! Prompts for a question, forwards it to the active session as an
//! `aiRequest` and shows the answer. Every outcome is reported to the user
//! here; nothing is propagated to the host.

use super::CommandOutcome;
use crate::error::Result;
use async_trait::async_trait;
use seekbug_config::constants::messages;
use seekbug_dap::constants::requests;
use seekbug_dap::{AiRequestArguments, AiResponse};
use seekbug_ports::{CommandHandler, DebugSession, HostContext, InputBoxOptions};
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone, Copy)]
pub struct AiSuggestCommand;

impl AiSuggestCommand {
    pub fn new() -> Self {
        Self
    }

    /// Run one invocation. Sends at most one request and never retries.
    pub async fn run(&self, host: &HostContext) -> CommandOutcome {
        let question = host
            .window
            .show_input_box(InputBoxOptions::prompt(messages::AI_SUGGEST_PROMPT))
            .await;
        let question = match question {
            Some(q) if !q.is_empty() => q,
            _ => {
                debug!("Suggestion prompt dismissed");
                return CommandOutcome::Cancelled;
            }
        };

        let Some(session) = host.debug.active_debug_session() else {
            host.window.show_error_message(messages::NO_ACTIVE_SESSION);
            return CommandOutcome::NoActiveSession;
        };

        let model_path = Self::model_path(host, session.as_ref());
        info!(session = %session.id(), model = ?model_path, "Requesting AI suggestion");

        match Self::request(session.as_ref(), &question, model_path).await {
            Ok(output) => {
                host.window
                    .show_information_message(&format!("{}{}", messages::AI_SUGGESTION_PREFIX, output));
                CommandOutcome::Suggested(output)
            }
            Err(e) => {
                warn!(session = %session.id(), error = %e, "AI suggestion failed");
                host.window
                    .show_error_message(&format!("{}{}", messages::ERROR_PREFIX, e));
                CommandOutcome::Failed(e)
            }
        }
    }

    /// `deep-seek-llm-path` as seen from the session's folder, or from the
    /// first open folder when the session has none.
    ///
    /// Forwarded exactly as configured, including an empty string; the
    /// adapter decides what an empty path means.
    fn model_path(host: &HostContext, session: &dyn DebugSession) -> Option<String> {
        let scope = session
            .workspace_folder()
            .cloned()
            .or_else(|| host.workspace.workspace_folders().into_iter().next());

        host.workspace.extension_settings(scope.as_ref()).deep_seek_llm_path
    }

    async fn request(
        session: &dyn DebugSession,
        question: &str,
        model_path: Option<String>,
    ) -> Result<String> {
        let arguments = AiRequestArguments::suggest(question, model_path).to_value()?;
        let response = session
            .custom_request(requests::AI_REQUEST, arguments)
            .await?;
        let response = AiResponse::from_value(&response)?;
        Ok(response.body.output)
    }
}

#[async_trait]
impl CommandHandler for AiSuggestCommand {
    async fn execute(&self, host: &HostContext) {
        let outcome = self.run(host).await;
        debug!(outcome = ?outcome, "aiSuggest finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CommandError;
    use seekbug_config::constants::keys;
    use seekbug_config::CONFIG_SECTION;
    use seekbug_ports::{HostError, WorkspaceFolder};
    use seekbug_testing::{FakeDebugSession, FakeHost};
    use serde_json::json;
    use std::sync::Arc;

    fn host_with_session(session: FakeDebugSession) -> (FakeHost, Arc<FakeDebugSession>) {
        let host = FakeHost::new();
        let session = Arc::new(session);
        host.debug.set_active_session(Some(session.clone()));
        (host, session)
    }

    #[tokio::test]
    async fn test_dismissed_prompt_is_silent() {
        let (host, session) = host_with_session(FakeDebugSession::new("s1"));
        host.window.answer(None);

        let outcome = AiSuggestCommand.run(&host.context()).await;

        assert_eq!(outcome, CommandOutcome::Cancelled);
        assert_eq!(session.request_count(), 0);
        assert!(host.window.is_silent());
    }

    #[tokio::test]
    async fn test_empty_answer_is_cancel() {
        let (host, session) = host_with_session(FakeDebugSession::new("s1"));
        host.window.answer(Some(""));

        assert_eq!(AiSuggestCommand.run(&host.context()).await, CommandOutcome::Cancelled);
        assert_eq!(session.request_count(), 0);
        assert!(host.window.is_silent());
    }

    #[tokio::test]
    async fn test_prompt_text() {
        let host = FakeHost::new();
        AiSuggestCommand.run(&host.context()).await;

        assert_eq!(
            host.window.prompts(),
            vec![InputBoxOptions::prompt("Enter your AI suggestion question:")]
        );
    }

    #[tokio::test]
    async fn test_no_active_session() {
        let host = FakeHost::new();
        host.window.answer(Some("why is x null"));

        let outcome = AiSuggestCommand.run(&host.context()).await;

        assert_eq!(outcome, CommandOutcome::NoActiveSession);
        assert_eq!(host.window.error_messages(), vec!["No active debug session."]);
        assert!(host.window.info_messages().is_empty());
    }

    #[tokio::test]
    async fn test_successful_suggestion() {
        let (host, session) = host_with_session(
            FakeDebugSession::new("s1").responding(json!({"body": {"output": "because..."}})),
        );
        host.workspace
            .set(CONFIG_SECTION, keys::DEEP_SEEK_LLM_PATH, "/models/m.gguf");
        host.window.answer(Some("why is x null"));

        let outcome = AiSuggestCommand.run(&host.context()).await;

        assert_eq!(outcome, CommandOutcome::Suggested("because...".to_string()));
        assert_eq!(
            session.requests(),
            vec![(
                "aiRequest".to_string(),
                json!({"command": "suggest why is x null", "serviceConfigPath": "/models/m.gguf"})
            )]
        );
        assert_eq!(host.window.info_messages(), vec!["AI Suggestion: because..."]);
        assert!(host.window.error_messages().is_empty());
    }

    #[tokio::test]
    async fn test_unset_model_path_omitted() {
        let (host, session) = host_with_session(
            FakeDebugSession::new("s1").responding(json!({"body": {"output": "ok"}})),
        );
        host.window.answer(Some("hi"));

        AiSuggestCommand.run(&host.context()).await;

        assert_eq!(session.requests()[0].1, json!({"command": "suggest hi"}));
    }

    #[tokio::test]
    async fn test_empty_model_path_forwarded_as_configured() {
        let (host, session) = host_with_session(
            FakeDebugSession::new("s1").responding(json!({"body": {"output": "ok"}})),
        );
        host.workspace.set(CONFIG_SECTION, keys::DEEP_SEEK_LLM_PATH, "");
        host.window.answer(Some("hi"));

        AiSuggestCommand.run(&host.context()).await;

        assert_eq!(
            session.requests()[0].1,
            json!({"command": "suggest hi", "serviceConfigPath": ""})
        );
    }

    #[tokio::test]
    async fn test_model_path_scoped_to_session_folder() {
        let app = WorkspaceFolder::new("app", "/src/app");
        let (host, session) = host_with_session(
            FakeDebugSession::new("s1")
                .in_folder(app.clone())
                .responding(json!({"body": {"output": "ok"}})),
        );
        host.workspace
            .set(CONFIG_SECTION, keys::DEEP_SEEK_LLM_PATH, "/global/m.gguf");
        host.workspace
            .set_scoped(&app, CONFIG_SECTION, keys::DEEP_SEEK_LLM_PATH, "/src/app/m.gguf");
        host.window.answer(Some("hi"));

        AiSuggestCommand.run(&host.context()).await;

        assert_eq!(session.requests()[0].1["serviceConfigPath"], "/src/app/m.gguf");
    }

    #[tokio::test]
    async fn test_model_path_falls_back_to_first_folder() {
        let first = WorkspaceFolder::new("first", "/src/first");
        let (host, session) = host_with_session(
            FakeDebugSession::new("s1").responding(json!({"body": {"output": "ok"}})),
        );
        host.workspace.add_folder(first.clone());
        host.workspace.add_folder(WorkspaceFolder::new("second", "/src/second"));
        host.workspace
            .set_scoped(&first, CONFIG_SECTION, keys::DEEP_SEEK_LLM_PATH, "/src/first/m.gguf");
        host.window.answer(Some("hi"));

        AiSuggestCommand.run(&host.context()).await;

        assert_eq!(session.requests()[0].1["serviceConfigPath"], "/src/first/m.gguf");
    }

    #[tokio::test]
    async fn test_rejected_request_shows_error_once() {
        let (host, session) = host_with_session(
            FakeDebugSession::new("s1")
                .rejecting(HostError::Request("adapter does not support aiRequest".to_string())),
        );
        host.window.answer(Some("why"));

        let outcome = AiSuggestCommand.run(&host.context()).await;

        assert_eq!(
            outcome,
            CommandOutcome::Failed(CommandError::Host(HostError::Request(
                "adapter does not support aiRequest".to_string()
            )))
        );
        assert_eq!(session.request_count(), 1);
        assert_eq!(
            host.window.error_messages(),
            vec!["Error: adapter does not support aiRequest"]
        );
        assert!(host.window.info_messages().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_response_reported() {
        let (host, session) =
            host_with_session(FakeDebugSession::new("s1").responding(json!({"body": {}})));
        host.window.answer(Some("why"));

        let outcome = AiSuggestCommand.run(&host.context()).await;

        match outcome {
            CommandOutcome::Failed(e) => assert!(e.is_malformed_response()),
            other => panic!("Expected Failed, got {:?}", other),
        }
        assert_eq!(session.request_count(), 1);
        let errors = host.window.error_messages();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error: malformed aiRequest response: "));
    }

    #[tokio::test]
    async fn test_whitespace_question_is_sent() {
        let (host, session) = host_with_session(
            FakeDebugSession::new("s1").responding(json!({"body": {"output": "ok"}})),
        );
        host.window.answer(Some("   "));

        AiSuggestCommand.run(&host.context()).await;

        assert_eq!(session.requests()[0].1["command"], "suggest    ");
    }

    #[tokio::test]
    async fn test_execute_reports_through_ui() {
        let host = FakeHost::new();
        host.window.answer(Some("why"));

        AiSuggestCommand.execute(&host.context()).await;

        assert_eq!(host.window.error_messages(), vec!["No active debug session."]);
    }
}
