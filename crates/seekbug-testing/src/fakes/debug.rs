//! Fake debug subsystem and sessions

use super::lock;
use async_trait::async_trait;
use seekbug_dap::{AiRequestHandler, Request};
use seekbug_ports::{
    DebugAdapterDescriptorFactoryRef, DebugAdapterExecutable, DebugHost, DebugSession,
    DebugSessionRef, HostError, Result, Subscription, WorkspaceFolder,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Fake Debug Session
// ============================================================================

/// How a [`FakeDebugSession`] answers custom requests
#[derive(Clone)]
pub enum SessionReply {
    /// Return this response message
    Respond(serde_json::Value),
    /// Fail with this error
    Reject(HostError),
    /// Route through an adapter-side handler, as the real adapter would
    Adapter(Arc<AiRequestHandler>),
}

/// A debug session with a scripted `custom_request`
pub struct FakeDebugSession {
    id: String,
    debug_type: String,
    folder: Option<WorkspaceFolder>,
    reply: Mutex<SessionReply>,
    requests: Mutex<Vec<(String, serde_json::Value)>>,
    next_seq: AtomicI64,
}

impl FakeDebugSession {
    /// Session of the SeekBug debugger type that answers with an empty body
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            debug_type: seekbug_config::DEBUGGER_TYPE.to_string(),
            folder: None,
            reply: Mutex::new(SessionReply::Respond(serde_json::json!({"body": {}}))),
            requests: Mutex::new(Vec::new()),
            next_seq: AtomicI64::new(1),
        }
    }

    pub fn with_debug_type(mut self, debug_type: impl Into<String>) -> Self {
        self.debug_type = debug_type.into();
        self
    }

    pub fn in_folder(mut self, folder: WorkspaceFolder) -> Self {
        self.folder = Some(folder);
        self
    }

    pub fn responding(self, response: serde_json::Value) -> Self {
        self.reply_with(SessionReply::Respond(response));
        self
    }

    pub fn rejecting(self, error: HostError) -> Self {
        self.reply_with(SessionReply::Reject(error));
        self
    }

    pub fn backed_by(self, handler: Arc<AiRequestHandler>) -> Self {
        self.reply_with(SessionReply::Adapter(handler));
        self
    }

    pub fn reply_with(&self, reply: SessionReply) {
        *lock(&self.reply) = reply;
    }

    /// Custom requests received so far, as `(command, arguments)`
    pub fn requests(&self) -> Vec<(String, serde_json::Value)> {
        lock(&self.requests).clone()
    }

    pub fn request_count(&self) -> usize {
        lock(&self.requests).len()
    }
}

#[async_trait]
impl DebugSession for FakeDebugSession {
    fn id(&self) -> &str {
        &self.id
    }

    fn debug_type(&self) -> &str {
        &self.debug_type
    }

    fn workspace_folder(&self) -> Option<&WorkspaceFolder> {
        self.folder.as_ref()
    }

    async fn custom_request(
        &self,
        command: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value> {
        lock(&self.requests).push((command.to_string(), arguments.clone()));
        let reply = lock(&self.reply).clone();

        match reply {
            SessionReply::Respond(value) => Ok(value),
            SessionReply::Reject(error) => Err(error),
            SessionReply::Adapter(handler) => {
                let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
                let request = Request::new(seq, command).with_arguments(arguments);
                let response = handler.handle(&request).await;
                let message = serde_json::to_value(&response)
                    .map_err(|e| HostError::Request(e.to_string()))?;
                response.into_result().map_err(HostError::Request)?;
                Ok(message)
            }
        }
    }
}

// ============================================================================
// Fake Debug Host
// ============================================================================

type FactoryMap = Arc<Mutex<HashMap<String, DebugAdapterDescriptorFactoryRef>>>;

/// The host's debug subsystem
#[derive(Default)]
pub struct FakeDebugHost {
    factories: FactoryMap,
    active: Mutex<Option<DebugSessionRef>>,
    refuse_registrations: Mutex<bool>,
}

impl FakeDebugHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_active_session(&self, session: Option<DebugSessionRef>) {
        *lock(&self.active) = session;
    }

    /// Make every subsequent factory registration fail
    pub fn refuse_registrations(&self, refuse: bool) {
        *lock(&self.refuse_registrations) = refuse;
    }

    /// Debugger types with a registered factory, sorted
    pub fn registered_types(&self) -> Vec<String> {
        let mut types: Vec<_> = lock(&self.factories).keys().cloned().collect();
        types.sort();
        types
    }

    /// Simulate the host starting `session`.
    ///
    /// Asks the registered factory for the session's debugger type; without
    /// one the host falls back to its own default executable.
    pub async fn start_session(
        &self,
        session: &dyn DebugSession,
        default: Option<DebugAdapterExecutable>,
    ) -> Result<Option<DebugAdapterExecutable>> {
        let factory = lock(&self.factories).get(session.debug_type()).cloned();
        match factory {
            Some(factory) => factory.create_debug_adapter_descriptor(session, default).await,
            None => Ok(default),
        }
    }
}

impl DebugHost for FakeDebugHost {
    fn register_debug_adapter_descriptor_factory(
        &self,
        debug_type: &str,
        factory: DebugAdapterDescriptorFactoryRef,
    ) -> Result<Subscription> {
        if *lock(&self.refuse_registrations) {
            return Err(HostError::Registration(format!(
                "debug type '{}' refused",
                debug_type
            )));
        }

        let mut factories = lock(&self.factories);
        if factories.contains_key(debug_type) {
            return Err(HostError::Registration(format!(
                "debug type '{}' already has a factory",
                debug_type
            )));
        }
        factories.insert(debug_type.to_string(), factory);

        let map = self.factories.clone();
        let key = debug_type.to_string();
        Ok(Subscription::new(format!("factory:{}", debug_type), move || {
            lock(&map)
                .remove(&key)
                .map(|_| ())
                .ok_or_else(|| HostError::Release(format!("factory '{}' not registered", key)))
        }))
    }

    fn active_debug_session(&self) -> Option<DebugSessionRef> {
        lock(&self.active).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekbug_dap::PlaceholderSuggestionEngine;
    use serde_json::json;

    #[tokio::test]
    async fn test_session_records_requests() {
        let session = FakeDebugSession::new("s1").responding(json!({"body": {"output": "ok"}}));
        let response = session
            .custom_request("aiRequest", json!({"command": "suggest hi"}))
            .await
            .unwrap();

        assert_eq!(response["body"]["output"], "ok");
        assert_eq!(
            session.requests(),
            vec![("aiRequest".to_string(), json!({"command": "suggest hi"}))]
        );
    }

    #[tokio::test]
    async fn test_adapter_backed_session_maps_failures() {
        let handler = Arc::new(AiRequestHandler::new(Arc::new(PlaceholderSuggestionEngine)));
        let session = FakeDebugSession::new("s1").backed_by(handler);

        let err = session
            .custom_request("aiRequest", json!({"command": "suggest"}))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            HostError::Request("Usage: ai suggest <your question or context>".to_string())
        );
    }

    #[tokio::test]
    async fn test_start_session_without_factory_uses_default() {
        let host = FakeDebugHost::new();
        let session = FakeDebugSession::new("s1");
        let default = DebugAdapterExecutable::new("/usr/bin/lldb-dap");

        let exe = host.start_session(&session, Some(default.clone())).await.unwrap();
        assert_eq!(exe, Some(default));
    }
}
